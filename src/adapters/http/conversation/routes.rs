//! Axum routes for conversation endpoints.
//!
//! Two deployments of the same handler: the scripted slot-filling flow at
//! `/api/conversation`, and the open-ended knowledge-base flow at
//! `/api/conversation/ask`. Which mode answers is fixed per endpoint by the
//! state each route carries.

use axum::routing::post;
use axum::Router;

use super::handlers::{post_conversation, ConversationAppState};

/// Combined router with both conversation endpoints under /api.
pub fn conversation_router(
    scripted: ConversationAppState,
    open_ended: ConversationAppState,
) -> Router {
    let scripted_routes = Router::new()
        .route("/conversation", post(post_conversation))
        .with_state(scripted);

    let open_ended_routes = Router::new()
        .route("/conversation/ask", post(post_conversation))
        .with_state(open_ended);

    Router::new().nest("/api", scripted_routes.merge(open_ended_routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;
    use crate::domain::conversation::{DialogueEngine, ResponseMode};
    use crate::ports::ResponsePicker;
    use std::sync::Arc;

    struct FixedPicker;

    impl ResponsePicker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            0
        }
    }

    fn state(mode: ResponseMode) -> ConversationAppState {
        ConversationAppState::new(
            Arc::new(InMemoryConversationStore::new()),
            Arc::new(DialogueEngine::new(mode, Arc::new(FixedPicker))),
        )
    }

    #[test]
    fn conversation_router_builds() {
        let _router = conversation_router(
            state(ResponseMode::Scripted),
            state(ResponseMode::OpenEnded),
        );
    }
}
