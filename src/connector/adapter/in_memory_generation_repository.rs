use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::GenerationRepository;
use crate::domain::{Generation, GenerationError};

/// Process-local generation history, kept in insertion order.
pub struct InMemoryGenerationRepository {
    generations: Arc<RwLock<Vec<Generation>>>,
}

impl InMemoryGenerationRepository {
    pub fn new() -> Self {
        Self {
            generations: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryGenerationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationRepository for InMemoryGenerationRepository {
    async fn save(&self, generation: &Generation) -> Result<(), GenerationError> {
        let mut store = self.generations.write().await;
        store.push(generation.clone());
        debug!("Saved generation {} ({} total)", generation.id(), store.len());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Generation>, GenerationError> {
        let store = self.generations.read().await;
        Ok(store.iter().find(|g| g.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Generation>, GenerationError> {
        let store = self.generations.read().await;
        Ok(store.iter().rev().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, GenerationError> {
        let mut store = self.generations.write().await;
        let before = store.len();
        store.retain(|g| g.id() != id);
        Ok(store.len() < before)
    }
}
