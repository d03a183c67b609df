//! Contextual destination lookup.

mod lookup;

pub use lookup::{lookup, title_case, DestinationRecord};
