//! Port for conversation state ownership.
//!
//! The store is the single owner of all conversation state for the life of
//! the process. It is also the unit of concurrency control: callers acquire
//! a per-conversation guard for the whole of a request's
//! append-user / respond / append-assistant cycle, so concurrent requests
//! for the same id serialize while different ids proceed in parallel.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, DomainError};

/// Exclusive handle to one conversation's state.
///
/// Holding the guard blocks other requests for the same conversation id;
/// drop it as soon as the turn is finished.
pub type ConversationGuard = OwnedMutexGuard<Conversation>;

/// Process-wide keyed conversation state.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Resolves an optional client-supplied id to a live conversation.
    ///
    /// If `id` is absent or unknown, a new active conversation is created
    /// under a freshly generated id. Returns the effective id and whether a
    /// conversation was created. Unknown ids are deliberately not an error:
    /// conversation ids are opaque handles, not authorization tokens.
    async fn get_or_create(&self, id: Option<ConversationId>) -> (ConversationId, bool);

    /// Acquires exclusive access to a conversation for a full dialogue turn.
    ///
    /// Returns `None` if the id is unknown.
    async fn lock(&self, id: &ConversationId) -> Option<ConversationGuard>;

    /// Appends a single message, serialized against other same-id calls.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the id is unknown
    /// - `InvalidStatusTransition` if the conversation is archived
    async fn append(&self, id: &ConversationId, message: Message) -> Result<(), DomainError>;

    /// Returns a point-in-time copy of a conversation, if it exists.
    async fn snapshot(&self, id: &ConversationId) -> Option<Conversation>;

    /// Returns the number of live conversations.
    async fn count(&self) -> usize;
}
