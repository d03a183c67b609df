//! Domain layer: pure trip-planning dialogue logic.
//!
//! Nothing in this layer performs I/O. Storage and transport concerns live
//! in `ports` and `adapters`.

pub mod conversation;
pub mod destination;
pub mod foundation;
pub mod knowledge;
