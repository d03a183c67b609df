//! Ports: trait seams between the domain and the outside world.

mod conversation_store;
mod response_picker;

pub use conversation_store::{ConversationGuard, ConversationStore};
pub use response_picker::ResponsePicker;
