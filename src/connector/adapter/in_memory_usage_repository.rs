use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::UsageRepository;
use crate::domain::GenerationError;

/// Process-local generation counter.
pub struct InMemoryUsageRepository {
    count: Arc<Mutex<u64>>,
}

impl InMemoryUsageRepository {
    pub fn new() -> Self {
        Self::with_count(0)
    }

    pub fn with_count(count: u64) -> Self {
        Self {
            count: Arc::new(Mutex::new(count)),
        }
    }
}

impl Default for InMemoryUsageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsageRepository for InMemoryUsageRepository {
    async fn generations_count(&self) -> Result<u64, GenerationError> {
        Ok(*self.count.lock().await)
    }

    async fn increment(&self) -> Result<u64, GenerationError> {
        let mut count = self.count.lock().await;
        *count = count.saturating_add(1);
        Ok(*count)
    }
}
