//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Liveness probe
//! - `/students` → Student documents (CRUD)
//! - `/courses` → Course documents (CRUD, roster expanded on single reads)
//!
//! Anything that matches no route falls through to a JSON:API 404.

use crate::middleware::log_request;
use crate::response::ApiError;
use crate::routes::{courses::courses_routes, health::health_routes, students::students_routes};
use axum::{Router, http::Uri, middleware::from_fn};
use tower_http::cors::CorsLayer;
use util::state::AppState;

pub mod common;
pub mod courses;
pub mod health;
pub mod resources;
pub mod students;

/// Builds the router mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/students", students_routes())
        .nest("/courses", courses_routes())
}

/// Builds the complete application: `/api` routes, the not-found fallback,
/// request logging and CORS, bound to `app_state`.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes())
        .fallback(route_not_found)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}
