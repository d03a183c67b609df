//! Conversation domain: messages, the conversation aggregate, the scripted
//! stage progression, and the dialogue engine that ties the answering
//! strategies together.

mod conversation;
mod engine;
mod message;
mod stage;
mod status;

pub use conversation::Conversation;
pub use engine::{DialogueEngine, EngineReply, ResponseMode};
pub use message::{Message, Role};
pub use stage::{DialogueStage, StageScript};
pub use status::ConversationStatus;
