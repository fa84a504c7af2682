mod completion_transport;
mod content_generator;
mod generation_repository;
mod usage_repository;

pub use completion_transport::*;
pub use content_generator::*;
pub use generation_repository::*;
pub use usage_repository::*;
