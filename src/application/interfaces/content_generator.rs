use async_trait::async_trait;

use crate::domain::{GenerationError, GenerationRequest, GenerationResult};

/// Turns one generation request into validated marketing assets.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError>;
}
