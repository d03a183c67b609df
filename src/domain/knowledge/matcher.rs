//! Keyword matcher over the static response tables.
//!
//! Matching is deterministic, rule-based substring matching, not inference.
//! Categories are evaluated in a fixed priority order and the first match
//! wins; within a table, declaration order breaks ties.

use crate::ports::ResponsePicker;

use super::tables::{
    ACCOMMODATION_KEYWORDS, ACCOMMODATION_RESPONSE, ACTIVITIES, DESTINATIONS, DURATION_KEYWORDS,
    DURATION_RESPONSE, FALLBACK_RESPONSES, GREETING_PHRASES, GREETING_RESPONSES, GREETING_WORDS,
    PLANNING_KEYWORDS, PLANNING_RESPONSE,
};

/// The category that produced an answer, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCategory {
    Greeting,
    Destination,
    Activity,
    Duration,
    Planning,
    Accommodation,
    Fallback,
}

/// Answers an open-ended message from the knowledge tables.
///
/// Total: every input produces a non-empty response. Randomized picks
/// (greetings and fallbacks) go through `picker` so tests can pin them.
pub fn answer(message: &str, picker: &dyn ResponsePicker) -> (String, MatchCategory) {
    let message = message.to_lowercase();

    if is_greeting(&message) {
        let idx = picker.pick(GREETING_RESPONSES.len());
        return (GREETING_RESPONSES[idx].to_string(), MatchCategory::Greeting);
    }

    if let Some(response) = first_match(&message, DESTINATIONS) {
        return (response.to_string(), MatchCategory::Destination);
    }

    if let Some(response) = first_match(&message, ACTIVITIES) {
        return (response.to_string(), MatchCategory::Activity);
    }

    if contains_any(&message, DURATION_KEYWORDS) {
        return (DURATION_RESPONSE.to_string(), MatchCategory::Duration);
    }

    if contains_any(&message, PLANNING_KEYWORDS) {
        return (PLANNING_RESPONSE.to_string(), MatchCategory::Planning);
    }

    if contains_any(&message, ACCOMMODATION_KEYWORDS) {
        return (
            ACCOMMODATION_RESPONSE.to_string(),
            MatchCategory::Accommodation,
        );
    }

    let idx = picker.pick(FALLBACK_RESPONSES.len());
    (FALLBACK_RESPONSES[idx].to_string(), MatchCategory::Fallback)
}

/// Greeting detection.
///
/// Single-word triggers match whole tokens (punctuation stripped) so short
/// triggers like "hi" don't fire inside other words; phrases match as
/// substrings.
fn is_greeting(message: &str) -> bool {
    let has_word = message
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|token| GREETING_WORDS.contains(&token));

    has_word || GREETING_PHRASES.iter().any(|p| message.contains(p))
}

/// First entry (declaration order) whose key is a substring of the message.
fn first_match(message: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| message.contains(key))
        .map(|(_, response)| *response)
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}
