use crate::response::DataResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint, useful for uptime checks, load balancers
/// and deployment probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "data": { "status": "ok" } }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(DataResponse::new(HealthStatus { status: "ok" }))
}
