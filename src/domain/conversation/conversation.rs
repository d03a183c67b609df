//! Conversation aggregate.
//!
//! A conversation owns an append-only, timestamp-monotonic message history
//! and a monotonically advancing status. Messages are never reordered or
//! mutated in place.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, Timestamp};

use super::{ConversationStatus, Message};

/// A single ongoing exchange of messages identified by an opaque id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier for this conversation.
    id: ConversationId,

    /// Ordered message history, oldest first.
    messages: Vec<Message>,

    /// Current lifecycle status.
    status: ConversationStatus,

    /// When the conversation was created.
    started_at: Timestamp,
}

impl Conversation {
    /// Creates a new active conversation with an empty history.
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            messages: Vec::new(),
            status: ConversationStatus::Active,
            started_at: Timestamp::now(),
        }
    }

    /// Returns the conversation ID.
    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    /// Returns the ordered message history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the current status.
    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    /// Returns when the conversation started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns the number of user messages sent so far.
    ///
    /// This is the turn count the scripted dialogue flow keys on.
    pub fn user_turn_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_user()).count()
    }

    /// Returns the most recent user message, if any.
    pub fn latest_user_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.is_user())
    }

    /// Appends a message to the history.
    ///
    /// # Errors
    ///
    /// - `InvalidStatusTransition` if the conversation is archived
    pub fn append(&mut self, message: Message) -> Result<(), DomainError> {
        if !self.status.accepts_user_input() {
            return Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                "Conversation is archived and read-only",
            ));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Advances the status.
    ///
    /// Advancing to the current status is a no-op; moving backwards is
    /// rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidStatusTransition` on a backwards move
    pub fn advance_status(&mut self, target: ConversationStatus) -> Result<(), DomainError> {
        if !self.status.can_advance_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                format!("Cannot move status from {:?} to {:?}", self.status, target),
            ));
        }
        self.status = target;
        Ok(())
    }
}
