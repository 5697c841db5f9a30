//! Write-payload sanitization.
//!
//! Keys starting with `$` could smuggle query or update operators into the
//! store, and `_id` could overwrite identities. Both are dropped at every
//! nesting level before a body reaches a handler. The top-level `id` is
//! dropped too: identifiers are only ever assigned by the server.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use db::schema::Attributes;
use serde_json::Value;

use crate::response::ApiError;

fn is_unsafe_key(key: &str) -> bool {
    key.starts_with('$') || key == "_id"
}

/// Returns a copy of `value` with every unsafe key removed, at any depth.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sanitize_map(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        leaf => leaf,
    }
}

fn sanitize_map(map: Attributes) -> Attributes {
    map.into_iter()
        .filter(|(key, _)| !is_unsafe_key(key))
        .map(|(key, value)| (key, sanitize(value)))
        .collect()
}

/// Sanitizes a write body's attributes, also discarding any client-supplied `id`.
pub fn sanitize_attributes(attributes: Attributes) -> Attributes {
    let mut clean = sanitize_map(attributes);
    clean.remove("id");
    clean
}

/// Pulls the attribute object out of a request body.
///
/// Accepts either a bare object or a JSON:API request document
/// (`{"data": {"attributes": {...}}}`). A body whose `data.attributes` is an
/// object is a document, whatever other top-level members (`meta`, `links`)
/// it carries; those are not stored. Anything else is `None`.
fn unwrap_attributes(body: Value) -> Option<Attributes> {
    let Value::Object(mut map) = body else {
        return None;
    };

    let is_document = map
        .get("data")
        .and_then(|data| data.get("attributes"))
        .is_some_and(Value::is_object);

    if is_document {
        if let Some(Value::Object(attributes)) = map
            .remove("data")
            .and_then(|mut data| data.get_mut("attributes").map(Value::take))
        {
            return Some(attributes);
        }
    }

    Some(map)
}

/// Extractor yielding a sanitized attribute object from a JSON write body.
///
/// Rejects with the 400 error envelope when the body is not JSON or its
/// attributes are not an object.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedBody(pub Attributes);

impl<S> FromRequest<S> for SanitizedBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::unable_to_save(Some(rejection.body_text())))?;

        let attributes = unwrap_attributes(body).ok_or_else(|| {
            ApiError::unable_to_save(Some("attributes must be a JSON object".to_owned()))
        })?;

        Ok(SanitizedBody(sanitize_attributes(attributes)))
    }
}
