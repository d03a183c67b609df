//! Conversation HTTP endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ConversationRequest, ConversationResponse, ErrorResponse};
pub use handlers::{ApiError, ConversationAppState};
pub use routes::conversation_router;
