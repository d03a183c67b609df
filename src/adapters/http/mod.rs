//! HTTP transport layer.

pub mod contextual;
pub mod conversation;
mod health;

pub use health::health_router;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;

/// CORS policy derived from server configuration.
///
/// Configured origins restrict the layer to exactly that list. With no
/// origins configured, development stays permissive while production emits
/// no cross-origin headers at all.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}
