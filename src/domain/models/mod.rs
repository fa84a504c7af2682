mod generation;
mod generation_request;
mod generation_result;

pub use generation::*;
pub use generation_request::*;
pub use generation_result::*;

#[cfg(test)]
pub(crate) use generation_result::fixtures;
