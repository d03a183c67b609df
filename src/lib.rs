//! Trip Sherpa - Conversational Trip-Planning Assistant
//!
//! This crate implements a deterministic, rule-based dialogue service that
//! guides users through trip planning via a scripted slot-filling flow or
//! open-ended keyword lookups against a static knowledge base.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
