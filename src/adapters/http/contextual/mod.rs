//! Contextual destination-data HTTP endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContextualDataResponse, DestinationRecordView};
pub use routes::contextual_router;
