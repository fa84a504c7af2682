use async_trait::async_trait;

use crate::domain::{Generation, GenerationError};

/// Persistence for generation history.
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    async fn save(&self, generation: &Generation) -> Result<(), GenerationError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Generation>, GenerationError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<Generation>, GenerationError>;

    /// Removes a stored generation. Returns `false` when no entry had that id.
    async fn delete(&self, id: &str) -> Result<bool, GenerationError>;
}
