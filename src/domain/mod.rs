//! # Domain Layer
//!
//! Request and result models, the failure taxonomy, prompt rendering and
//! model-output parsing. Nothing here performs I/O.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
