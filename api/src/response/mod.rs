//! JSON:API-style response envelopes.
//!
//! Successful responses wrap their payload under `data`:
//! ```json
//! {
//!   "data": { "type": "students", "id": "3f0c…", "attributes": { "name": "Ana" } }
//! }
//! ```
//!
//! Failures carry a list of error objects under `errors`:
//! ```json
//! {
//!   "errors": [
//!     {
//!       "status": "404",
//!       "title": "Resource does not exist",
//!       "description": "We could not find a student with id: 3f0c…"
//!     }
//!   ]
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::schema::Attributes;
use serde::Serialize;
use serde_json::Value;
use services::ServiceError;

/// A single resource object: `{type, id, attributes}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: Attributes,
}

impl Resource {
    /// Builds a resource from a flat `{id, ...attributes}` object.
    ///
    /// The `id` key is lifted out; every other key becomes an attribute.
    pub fn format(resource_type: &str, mut flat: Attributes) -> Self {
        let id = match flat.remove("id") {
            Some(Value::String(id)) => id,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        Self {
            resource_type: resource_type.to_owned(),
            id,
            attributes: flat,
        }
    }
}

/// Top-level success document.
#[derive(Debug, Serialize)]
pub struct DataResponse<T>
where
    T: Serialize,
{
    pub data: T,
}

impl<T> DataResponse<T>
where
    T: Serialize,
{
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
    pub description: String,
}

/// Top-level error document.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorObject>,
}

/// An error that renders itself as an `ErrorResponse` with a matching status code.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: String,
    pub description: String,
}

impl ApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// 404 for a document id that does not exist in the collection.
    pub fn not_found(singular: &str, id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Resource does not exist",
            format!("We could not find a {singular} with id: {id}"),
        )
    }

    /// 400 for a write the store refused. `detail` is appended when known.
    pub fn unable_to_save(detail: Option<String>) -> Self {
        let description = match detail {
            Some(detail) => format!("We were not able to save your data: {detail}"),
            None => "We were not able to save your data".to_owned(),
        };
        Self::new(StatusCode::BAD_REQUEST, "Problem with the data", description)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
            "Something went wrong on our end",
        )
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Route not found",
            format!("No route matches {path}"),
        )
    }

    /// Maps a service failure for a collection whose documents are called `singular`.
    ///
    /// Database errors are logged here and surface as a bare 500.
    pub fn from_service(err: ServiceError, singular: &str) -> Self {
        match err {
            ServiceError::NotFound { id } => Self::not_found(singular, &id),
            ServiceError::InvalidInput(err) => Self::unable_to_save(Some(err.to_string())),
            ServiceError::Database(err) => {
                tracing::error!(error = %err, resource = singular, "Database error");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            errors: vec![ErrorObject {
                status: self.status.as_u16().to_string(),
                title: self.title,
                description: self.description,
            }],
        };
        (self.status, Json(body)).into_response()
    }
}
