use async_trait::async_trait;

use crate::domain::GenerationError;

/// Per-account generation counter.
#[async_trait]
pub trait UsageRepository: Send + Sync {
    async fn generations_count(&self) -> Result<u64, GenerationError>;

    /// Increments the counter and returns the new value.
    async fn increment(&self) -> Result<u64, GenerationError>;
}
