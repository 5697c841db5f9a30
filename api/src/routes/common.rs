use crate::response::{ApiError, DataResponse, Resource};
use crate::sanitize::SanitizedBody;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::schema::Attributes;
use services::{Document, Service};
use util::state::AppState;

/// Formats a service document as a resource of `S`'s type.
pub fn resource<S: Service>(document: Document) -> Resource {
    Resource::format(S::TYPE, document.into_flat())
}

/// Wraps a single document in the success envelope.
pub fn document_response<S: Service>(status: StatusCode, document: Document) -> Response {
    (status, Json(DataResponse::new(resource::<S>(document)))).into_response()
}

/// Resolves the body of a write to the document at `id`.
///
/// A rejected body only surfaces once the document is known to exist, so a
/// write to a missing id answers 404 whatever it carries.
pub async fn body_for_existing<S: Service>(
    app_state: &AppState,
    id: &str,
    body: Result<SanitizedBody, ApiError>,
) -> Result<Attributes, ApiError> {
    match body {
        Ok(SanitizedBody(attributes)) => Ok(attributes),
        Err(rejection) => {
            S::ensure_exists(app_state.db_clone(), id.to_owned())
                .await
                .map_err(|err| ApiError::from_service(err, S::SINGULAR))?;
            Err(rejection)
        }
    }
}
