mod completion_gateway_client;
mod gateway_config;
mod in_memory_generation_repository;
mod in_memory_usage_repository;
mod json_file_repository;
mod reqwest_transport;

pub use completion_gateway_client::*;
pub use gateway_config::*;
pub use in_memory_generation_repository::*;
pub use in_memory_usage_repository::*;
pub use json_file_repository::*;
pub use reqwest_transport::*;
