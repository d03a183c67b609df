//! Dialogue engine: decides how the assistant answers a turn.
//!
//! The engine is mode-agnostic and pure: given a conversation snapshot it
//! produces the next assistant reply, and the transport handler owns all
//! storage mutation around it.

use std::sync::Arc;

use crate::domain::knowledge;
use crate::ports::ResponsePicker;

use super::{Conversation, ConversationStatus, StageScript};

/// How the engine answers user turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Scripted slot-filling flow keyed purely on user-turn count; message
    /// content is stored but never interpreted.
    Scripted,

    /// Open-ended keyword lookup against the knowledge base; turn count is
    /// ignored and the status is left unchanged.
    OpenEnded,
}

/// The assistant's reply for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReply {
    /// The assistant message content. Never empty.
    pub content: String,
    /// Suggested next actions, empty in open-ended mode.
    pub suggested_actions: Vec<String>,
    /// The conversation status after this turn.
    pub status: ConversationStatus,
}

/// Produces assistant replies for a conversation.
///
/// A deployment wires one engine per endpoint, each with its mode fixed;
/// callers can compose or switch strategies without touching storage.
pub struct DialogueEngine {
    mode: ResponseMode,
    picker: Arc<dyn ResponsePicker>,
}

impl DialogueEngine {
    /// Creates an engine with the given mode and randomness source.
    pub fn new(mode: ResponseMode, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { mode, picker }
    }

    /// Returns the engine's mode.
    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// Produces the reply for the conversation's latest user turn.
    ///
    /// Total: unmatched queries resolve to a fallback response, never an
    /// error. Does not mutate the conversation.
    pub fn respond(&self, conversation: &Conversation) -> EngineReply {
        match self.mode {
            ResponseMode::Scripted => self.respond_scripted(conversation),
            ResponseMode::OpenEnded => self.respond_open_ended(conversation),
        }
    }

    fn respond_scripted(&self, conversation: &Conversation) -> EngineReply {
        let script = StageScript::for_turn(conversation.user_turn_count());

        // Status only ever advances; a conversation already past the stage's
        // status keeps its current one.
        let status = if conversation.status().can_advance_to(&script.status_after) {
            script.status_after
        } else {
            conversation.status()
        };

        EngineReply {
            content: script.prompt.to_string(),
            suggested_actions: script
                .suggested_actions
                .iter()
                .map(|s| s.to_string())
                .collect(),
            status,
        }
    }

    fn respond_open_ended(&self, conversation: &Conversation) -> EngineReply {
        let latest = conversation
            .latest_user_message()
            .map(|m| m.content())
            .unwrap_or_default();

        let (content, _category) = knowledge::answer(latest, self.picker.as_ref());

        EngineReply {
            content,
            suggested_actions: Vec::new(),
            status: conversation.status(),
        }
    }
}
