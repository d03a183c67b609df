//! Conversation status lifecycle.
//!
//! Status only ever advances; the dialogue engine never moves a conversation
//! back to an earlier status.

use serde::{Deserialize, Serialize};

/// The lifecycle status of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    /// Active dialogue; the assistant is still collecting trip details.
    #[default]
    Active,

    /// Enough detail collected to offer itinerary generation.
    ReadyForItinerary,

    /// Conversation closed by an external action; read-only.
    Archived,
}

impl ConversationStatus {
    /// Returns true if the conversation still accepts user messages.
    pub fn accepts_user_input(&self) -> bool {
        !matches!(self, Self::Archived)
    }

    /// Returns true if advancing to `target` is a forward move.
    ///
    /// Staying in place is always allowed; moving backwards never is.
    pub fn can_advance_to(&self, target: &Self) -> bool {
        self.rank() <= target.rank()
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Active => 0,
            Self::ReadyForItinerary => 1,
            Self::Archived => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_active() {
        assert_eq!(ConversationStatus::default(), ConversationStatus::Active);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&ConversationStatus::ReadyForItinerary).unwrap();
        assert_eq!(json, "\"ready_for_itinerary\"");
    }

    #[test]
    fn archived_does_not_accept_input() {
        assert!(ConversationStatus::Active.accepts_user_input());
        assert!(ConversationStatus::ReadyForItinerary.accepts_user_input());
        assert!(!ConversationStatus::Archived.accepts_user_input());
    }

    #[test]
    fn status_never_regresses() {
        use ConversationStatus::*;
        assert!(Active.can_advance_to(&ReadyForItinerary));
        assert!(ReadyForItinerary.can_advance_to(&Archived));
        assert!(!ReadyForItinerary.can_advance_to(&Active));
        assert!(!Archived.can_advance_to(&ReadyForItinerary));
    }

    #[test]
    fn staying_in_place_is_allowed() {
        use ConversationStatus::*;
        for status in [Active, ReadyForItinerary, Archived] {
            assert!(status.can_advance_to(&status));
        }
    }
}
