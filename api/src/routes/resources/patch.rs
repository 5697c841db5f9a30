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

/// PATCH /api/{collection}/{id}
///
/// Shallow-merges the body into the stored document: supplied top-level keys
/// overwrite, everything else is kept. The merged document must still satisfy
/// the collection schema.
///
/// ### Responses
/// - `200 OK` with the updated resource
/// - `400 Bad Request` when the merged document is invalid
/// - `404 Not Found` when no document has this id
pub async fn merge_update<S: Service>(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Result<SanitizedBody, ApiError>,
) -> Response {
    let attributes = match body_for_existing::<S>(&app_state, &id, body).await {
        Ok(attributes) => attributes,
        Err(err) => return err.into_response(),
    };

    match S::update(app_state.db_clone(), id, attributes, UpdateMode::Merge).await {
        Ok(document) => document_response::<S>(StatusCode::OK, document),
        Err(err) => ApiError::from_service(err, S::SINGULAR).into_response(),
    }
}
