//! Liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// GET /health - liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Router exposing the health endpoint.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
