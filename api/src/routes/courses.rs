//! `/api/courses`: course documents with a `students` roster of student ids.
//!
//! `GET /api/courses/{id}` returns the roster expanded into student objects.
//! Every other endpoint returns the stored ids as-is.

use crate::routes::resources::resource_routes;
use axum::Router;
use services::CourseService;
use util::state::AppState;

pub fn courses_routes() -> Router<AppState> {
    resource_routes::<CourseService>()
}
