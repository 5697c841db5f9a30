use crate::response::ApiError;
use crate::routes::common::{body_for_existing, document_response};
use crate::sanitize::SanitizedBody;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::{Service, UpdateMode};
use util::state::AppState;

/// PUT /api/{collection}/{id}
///
/// Replaces the stored document with the body. Fields left out fall back to
/// their schema defaults, or disappear when they have none.
///
/// ### Request Body
/// ```json
/// { "name": "Data Systems" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "data": {
///     "type": "courses",
///     "id": "9b1e…",
///     "attributes": { "name": "Data Systems", "description": "", "students": [] }
///   }
/// }
/// ```
/// - `400 Bad Request` when the body is invalid
/// - `404 Not Found` when no document has this id
pub async fn replace<S: Service>(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Result<SanitizedBody, ApiError>,
) -> Response {
    let attributes = match body_for_existing::<S>(&app_state, &id, body).await {
        Ok(attributes) => attributes,
        Err(err) => return err.into_response(),
    };

    match S::update(app_state.db_clone(), id, attributes, UpdateMode::Replace).await {
        Ok(document) => document_response::<S>(StatusCode::OK, document),
        Err(err) => ApiError::from_service(err, S::SINGULAR).into_response(),
    }
}
