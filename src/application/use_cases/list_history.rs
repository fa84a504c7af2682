use std::sync::Arc;

use crate::application::GenerationRepository;
use crate::domain::{Generation, GenerationError};

pub struct ListHistoryUseCase {
    history: Arc<dyn GenerationRepository>,
}

impl ListHistoryUseCase {
    pub fn new(history: Arc<dyn GenerationRepository>) -> Self {
        Self { history }
    }

    /// Stored generations, newest first, truncated to `limit` when given.
    pub async fn execute(&self, limit: Option<usize>) -> Result<Vec<Generation>, GenerationError> {
        let mut generations = self.history.list().await?;
        if let Some(limit) = limit {
            generations.truncate(limit);
        }
        Ok(generations)
    }

    /// One stored generation, re-opened for viewing.
    pub async fn get(&self, id: &str) -> Result<Generation, GenerationError> {
        self.history
            .find_by_id(id)
            .await?
            .ok_or_else(|| GenerationError::not_found(format!("Generation not found: {}", id)))
    }
}
