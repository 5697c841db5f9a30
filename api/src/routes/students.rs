//! `/api/students`: plain documents with a `name` and an optional `email`.

use crate::routes::resources::resource_routes;
use axum::Router;
use services::StudentService;
use util::state::AppState;

pub fn students_routes() -> Router<AppState> {
    resource_routes::<StudentService>()
}
