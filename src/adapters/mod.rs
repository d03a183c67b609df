//! Adapters: concrete implementations behind the ports, plus the HTTP
//! transport layer.

pub mod http;
pub mod random;
pub mod storage;
