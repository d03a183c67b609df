//! Static keyword-to-response knowledge base for open-ended queries.

mod matcher;
mod tables;

pub use matcher::{answer, MatchCategory};
pub use tables::{
    ACCOMMODATION_KEYWORDS, ACCOMMODATION_RESPONSE, ACTIVITIES, DESTINATIONS, DURATION_KEYWORDS,
    DURATION_RESPONSE, FALLBACK_RESPONSES, GREETING_PHRASES, GREETING_RESPONSES, GREETING_WORDS,
    PLANNING_KEYWORDS, PLANNING_RESPONSE,
};
