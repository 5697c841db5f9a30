use crate::response::{ApiError, DataResponse, Resource};
use crate::routes::common::{document_response, resource};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::Service;
use util::state::AppState;

/// GET /api/{collection}
///
/// Lists every document in the collection, oldest first.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "data": [
///     { "type": "students", "id": "3f0c…", "attributes": { "name": "Ana" } }
///   ]
/// }
/// ```
///
/// - `500 Internal Server Error`
pub async fn list<S: Service>(State(app_state): State<AppState>) -> Response {
    match S::find_all(app_state.db_clone()).await {
        Ok(documents) => {
            let data: Vec<Resource> = documents.into_iter().map(resource::<S>).collect();
            (StatusCode::OK, Json(DataResponse::new(data))).into_response()
        }
        Err(err) => ApiError::from_service(err, S::SINGULAR).into_response(),
    }
}

/// GET /api/{collection}/{id}
///
/// Fetches one document. For courses the `students` roster is expanded into
/// the matching student objects.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "data": {
///     "type": "courses",
///     "id": "9b1e…",
///     "attributes": {
///       "name": "Databases",
///       "description": "",
///       "students": [{ "id": "3f0c…", "name": "Ana" }]
///     }
///   }
/// }
/// ```
///
/// - `404 Not Found`
/// ```json
/// {
///   "errors": [{
///     "status": "404",
///     "title": "Resource does not exist",
///     "description": "We could not find a course with id: 9b1e…"
///   }]
/// }
/// ```
pub async fn get_by_id<S: Service>(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match S::find_by_id(app_state.db_clone(), id).await {
        Ok(document) => document_response::<S>(StatusCode::OK, document),
        Err(err) => ApiError::from_service(err, S::SINGULAR).into_response(),
    }
}
