use crate::response::ApiError;
use crate::routes::common::document_response;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::Service;
use util::state::AppState;

/// DELETE /api/{collection}/{id}
///
/// Deletes the document and echoes its last stored state. Course rosters that
/// still reference a deleted student simply stop showing it.
///
/// ### Responses
/// - `200 OK` with the deleted resource
/// - `404 Not Found`
/// ```json
/// {
///   "errors": [{
///     "status": "404",
///     "title": "Resource does not exist",
///     "description": "We could not find a student with id: 3f0c…"
///   }]
/// }
/// ```
pub async fn remove<S: Service>(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match S::delete(app_state.db_clone(), id).await {
        Ok(document) => document_response::<S>(StatusCode::OK, document),
        Err(err) => ApiError::from_service(err, S::SINGULAR).into_response(),
    }
}
