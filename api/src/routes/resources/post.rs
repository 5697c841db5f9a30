use crate::response::ApiError;
use crate::routes::common::document_response;
use crate::sanitize::SanitizedBody;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::{Service, ServiceError};
use util::state::AppState;

/// POST /api/{collection}
///
/// Creates a document from the (sanitized) request body. The body may be a
/// bare attribute object or a JSON:API document; the server assigns the id.
///
/// ### Request Body
/// ```json
/// { "name": "Ana", "email": "ana@example.com" }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "data": { "type": "students", "id": "3f0c…", "attributes": { "name": "Ana", "email": "ana@example.com" } }
/// }
/// ```
///
/// - `400 Bad Request` (schema violation or rejected write)
/// ```json
/// {
///   "errors": [{
///     "status": "400",
///     "title": "Problem with the data",
///     "description": "We were not able to save your data: name is required"
///   }]
/// }
/// ```
pub async fn create<S: Service>(
    State(app_state): State<AppState>,
    SanitizedBody(attributes): SanitizedBody,
) -> Response {
    match S::create(app_state.db_clone(), attributes).await {
        Ok(document) => document_response::<S>(StatusCode::CREATED, document),
        Err(ServiceError::Database(err)) => {
            tracing::error!(error = %err, collection = S::TYPE, "Create rejected by the store");
            ApiError::unable_to_save(None).into_response()
        }
        Err(err) => ApiError::from_service(err, S::SINGULAR).into_response(),
    }
}
