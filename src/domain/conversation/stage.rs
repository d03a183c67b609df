//! Scripted dialogue stages.
//!
//! The slot-filling flow is a linear, non-branching progression keyed purely
//! on how many user turns have occurred, never on message content. Content
//! interpretation is the knowledge matcher's job.

use serde::{Deserialize, Serialize};

use super::ConversationStatus;

/// A discrete point in the scripted slot-filling dialogue.
///
/// Stages advance one per user turn and stop at `Ready`:
/// `CollectLogistics` → `CollectInterests` → `CollectDestination` →
/// `CollectBudget` → `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStage {
    /// Ask how many travelers and when they want to go.
    CollectLogistics,

    /// Ask what kind of trip they are interested in.
    CollectInterests,

    /// Ask where they want to go, or offer recommendations.
    CollectDestination,

    /// Ask what budget they have in mind.
    CollectBudget,

    /// Enough collected; offer to generate an itinerary.
    Ready,
}

impl DialogueStage {
    /// Maps a user-turn count to its stage.
    ///
    /// Total over all counts: turn 1 is the first stage, every turn from 5
    /// onwards stays in `Ready`. Turn 0 cannot occur through the API (a
    /// response is only generated after a user message is appended) but maps
    /// to the first stage for totality.
    pub fn for_turn(turn_count: usize) -> Self {
        match turn_count {
            0 | 1 => Self::CollectLogistics,
            2 => Self::CollectInterests,
            3 => Self::CollectDestination,
            4 => Self::CollectBudget,
            _ => Self::Ready,
        }
    }

    /// Returns the scripted assistant prompt for this stage.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::CollectLogistics => {
                "Great, let's plan your trip! How many people are traveling, \
                 and do you have dates in mind?"
            }
            Self::CollectInterests => {
                "Perfect! What kind of trip are you interested in? For example \
                 beaches, culture, adventure, food, or relaxation."
            }
            Self::CollectDestination => {
                "Sounds wonderful. Do you already have a destination in mind, \
                 or would you like some recommendations?"
            }
            Self::CollectBudget => {
                "Got it. What budget range are you thinking of for this trip?"
            }
            Self::Ready => {
                "I have everything I need! Would you like me to put together a \
                 draft itinerary, or is there anything else you'd like to add?"
            }
        }
    }

    /// Returns the suggested next actions for this stage.
    pub fn suggested_actions(&self) -> &'static [&'static str] {
        match self {
            Self::CollectLogistics => &["specify_dates", "specify_travelers"],
            Self::CollectInterests => &["specify_interests"],
            Self::CollectDestination => &["specify_destination", "request_recommendations"],
            Self::CollectBudget => &["specify_budget"],
            Self::Ready => &["generate_itinerary", "ask_more_questions"],
        }
    }

    /// Returns the conversation status after responding in this stage.
    pub fn status_after(&self) -> ConversationStatus {
        match self {
            Self::Ready => ConversationStatus::ReadyForItinerary,
            _ => ConversationStatus::Active,
        }
    }

    /// Returns true if this is the terminal stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// The full scripted response for a turn: prompt, actions, status.
///
/// Bundling these keeps the stage table the single source of truth, so
/// adding a stage is a data change rather than a control-flow change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageScript {
    pub stage: DialogueStage,
    pub prompt: &'static str,
    pub suggested_actions: &'static [&'static str],
    pub status_after: ConversationStatus,
}

impl StageScript {
    /// Builds the script for a given user-turn count.
    pub fn for_turn(turn_count: usize) -> Self {
        let stage = DialogueStage::for_turn(turn_count);
        Self {
            stage,
            prompt: stage.prompt(),
            suggested_actions: stage.suggested_actions(),
            status_after: stage.status_after(),
        }
    }
}
