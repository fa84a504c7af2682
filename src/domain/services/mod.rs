mod prompt_builder;
mod response_parser;

pub use prompt_builder::*;
pub use response_parser::*;
