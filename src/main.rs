//! Trip Sherpa server binary.
//!
//! Wires the in-memory store, the two dialogue engines, and the HTTP router,
//! then serves until shutdown.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use trip_sherpa::adapters::http::conversation::{conversation_router, ConversationAppState};
use trip_sherpa::adapters::http::{contextual::contextual_router, cors_layer, health_router};
use trip_sherpa::adapters::random::ThreadRngPicker;
use trip_sherpa::adapters::storage::InMemoryConversationStore;
use trip_sherpa::config::AppConfig;
use trip_sherpa::domain::conversation::{DialogueEngine, ResponseMode};
use trip_sherpa::ports::ConversationStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let app = build_router(&config);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "trip-sherpa listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the full application router.
///
/// Both conversation endpoints share one store so a conversation id is valid
/// against either; the engines differ only in response mode.
fn build_router(config: &AppConfig) -> Router {
    let store: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
    let picker = Arc::new(ThreadRngPicker::new());

    let scripted = ConversationAppState::new(
        store.clone(),
        Arc::new(DialogueEngine::new(ResponseMode::Scripted, picker.clone())),
    );
    let open_ended = ConversationAppState::new(
        store,
        Arc::new(DialogueEngine::new(ResponseMode::OpenEnded, picker)),
    );

    conversation_router(scripted, open_ended)
        .merge(contextual_router())
        .merge(health_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
