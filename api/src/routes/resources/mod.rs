//! # Resource Routes
//!
//! Generic CRUD handlers shared by every document collection. Each handler is
//! parameterised over a [`Service`], which supplies the collection name, the
//! singular noun used in error messages, and the schema.
//!
//! ## Structure
//! - `get.rs`: list all, fetch one
//! - `post.rs`: create
//! - `patch.rs`: partial update (merge)
//! - `put.rs`: full replace
//! - `delete.rs`: delete

use axum::{Router, routing::get};
use services::Service;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod patch;
pub mod post;
pub mod put;

/// Builds the route group for the collection served by `S`.
///
/// - `GET /` → `list`
/// - `POST /` → `create`
/// - `GET /{id}` → `get_by_id`
/// - `PATCH /{id}` → `merge_update`
/// - `PUT /{id}` → `replace`
/// - `DELETE /{id}` → `remove`
pub fn resource_routes<S: Service>() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list::<S>).post(post::create::<S>))
        .route(
            "/{id}",
            get(get::get_by_id::<S>)
                .patch(patch::merge_update::<S>)
                .put(put::replace::<S>)
                .delete(delete::remove::<S>),
        )
}
