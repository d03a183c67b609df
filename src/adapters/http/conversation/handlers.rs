//! HTTP handlers for conversation endpoints.
//!
//! The handler owns the storage side effects of a dialogue turn: it appends
//! the user message, asks the engine for a reply, and appends the assistant
//! message, all under the store's per-conversation guard so concurrent
//! requests for the same id cannot interleave.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::conversation::{DialogueEngine, Message};
use crate::domain::foundation::{ConversationId, ErrorCode};
use crate::ports::ConversationStore;

use super::dto::{ConversationRequest, ConversationResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for conversation handlers.
///
/// Two instances are wired at startup, one per endpoint, differing only in
/// the engine's response mode.
#[derive(Clone)]
pub struct ConversationAppState {
    pub store: Arc<dyn ConversationStore>,
    pub engine: Arc<DialogueEngine>,
}

impl ConversationAppState {
    /// Creates a new ConversationAppState.
    pub fn new(store: Arc<dyn ConversationStore>, engine: Arc<DialogueEngine>) -> Self {
        Self { store, engine }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/conversation
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/conversation - Run one dialogue turn.
///
/// Validates the message before touching the store, so a malformed request
/// never creates or mutates a conversation.
///
/// # Errors
/// - 400 Bad Request: missing/empty `message`, or a non-JSON/ill-typed body
/// - 500 Internal Server Error: unexpected failure; details are logged, the
///   body stays opaque
pub async fn post_conversation(
    State(state): State<ConversationAppState>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::BadRequest(format!("Invalid request body: {}", rejection)))?;

    let content = request.message.as_deref().unwrap_or("").trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest(
            "Field 'message' is required and cannot be empty".to_string(),
        ));
    }
    let user_message =
        Message::user(content).map_err(|e| ApiError::BadRequest(e.message.clone()))?;

    // A malformed id is treated the same as an unknown one: start fresh.
    let supplied_id: Option<ConversationId> = request
        .conversation_id
        .as_deref()
        .and_then(|raw| raw.parse().ok());

    let (conversation_id, created) = state.store.get_or_create(supplied_id).await;
    if created {
        tracing::debug!(%conversation_id, "started new conversation");
    }

    // Hold the per-id guard for the whole turn.
    let mut conversation = state
        .store
        .lock(&conversation_id)
        .await
        .ok_or_else(|| ApiError::Internal("Conversation disappeared after creation".to_string()))?;

    conversation.append(user_message).map_err(ApiError::from)?;

    let reply = state.engine.respond(&conversation);

    conversation
        .append(Message::assistant(reply.content.clone()).map_err(ApiError::from)?)
        .map_err(ApiError::from)?;
    conversation
        .advance_status(reply.status)
        .map_err(ApiError::from)?;
    drop(conversation);

    let suggested_actions = if reply.suggested_actions.is_empty() {
        None
    } else {
        Some(reply.suggested_actions)
    };

    Ok((
        StatusCode::OK,
        Json(ConversationResponse {
            conversation_id: conversation_id.to_string(),
            message: reply.content,
            suggested_actions,
            status: reply.status,
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts failures to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<crate::domain::foundation::DomainError> for ApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField => {
                ApiError::BadRequest(err.message)
            }
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
