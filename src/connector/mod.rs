//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat-completion gateway (reqwest transport + response classification)
//! - History and usage storage (in-memory)
//! - Inbound HTTP (axum) and CLI wiring

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
