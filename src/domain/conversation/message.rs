//! Message entity for conversations.
//!
//! Messages are immutable records of user/assistant exchanges within a
//! conversation. Each message has a role, content, and timestamp.

use crate::domain::foundation::{DomainError, MessageId, Timestamp};
use serde::{Deserialize, Serialize};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// User input.
    User,
    /// Assistant response.
    Assistant,
}

/// An immutable message within a conversation.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `content` is non-empty (validated at construction)
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The role of the message sender.
    role: Role,

    /// The content of the message.
    content: String,

    /// When the message was created.
    created_at: Timestamp,
}

impl Message {
    /// Creates a new message with the given role and content.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty or whitespace-only
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::empty_field("content"));
        }

        Ok(Self {
            id: MessageId::new(),
            role,
            content,
            created_at: Timestamp::now(),
        })
    }

    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty
    pub fn user(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty
    pub fn assistant(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::Assistant, content)
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if this message is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true if this message is from the assistant.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    mod role {
        use super::*;

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&Role::User).unwrap();
            assert_eq!(json, "\"user\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let role: Role = serde_json::from_str("\"assistant\"").unwrap();
            assert_eq!(role, Role::Assistant);
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn user_creates_user_message() {
            let msg = Message::user("Hello").unwrap();
            assert!(msg.is_user());
            assert!(!msg.is_assistant());
            assert_eq!(msg.content(), "Hello");
        }

        #[test]
        fn assistant_creates_assistant_message() {
            let msg = Message::assistant("Hi there").unwrap();
            assert!(msg.is_assistant());
            assert!(!msg.is_user());
        }

        #[test]
        fn rejects_empty_content_with_empty_field_code() {
            let err = Message::user("").unwrap_err();
            assert_eq!(err.code, ErrorCode::EmptyField);
        }

        #[test]
        fn rejects_whitespace_only_content() {
            let err = Message::user("   ").unwrap_err();
            assert_eq!(err.code, ErrorCode::EmptyField);
        }

        #[test]
        fn sets_created_at() {
            let msg = Message::user("Hello").unwrap();
            let now = Timestamp::now();
            assert!(msg.created_at().as_datetime() <= now.as_datetime());
        }

        #[test]
        fn ids_are_unique_across_messages() {
            let a = Message::user("a").unwrap();
            let b = Message::user("b").unwrap();
            assert_ne!(a.id(), b.id());
        }
    }
}
