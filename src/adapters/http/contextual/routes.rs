//! Axum routes for the contextual-data endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::get_contextual_data;

/// Router with the contextual-data endpoint under /api.
pub fn contextual_router() -> Router {
    Router::new().route("/api/contextual-data", get(get_contextual_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contextual_router_builds() {
        let _router = contextual_router();
    }
}
