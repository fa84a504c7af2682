use std::sync::Arc;

use tracing::info;

use crate::application::GenerationRepository;
use crate::domain::GenerationError;

/// Removes a generation from history. The usage counter is left untouched.
pub struct DeleteGenerationUseCase {
    history: Arc<dyn GenerationRepository>,
}

impl DeleteGenerationUseCase {
    pub fn new(history: Arc<dyn GenerationRepository>) -> Self {
        Self { history }
    }

    pub async fn execute(&self, id: &str) -> Result<(), GenerationError> {
        if !self.history.delete(id).await? {
            return Err(GenerationError::not_found(format!(
                "Generation not found: {}",
                id
            )));
        }
        info!("Generation removed from history: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryGenerationRepository;
    use crate::domain::models::fixtures::complete_result;
    use crate::domain::{Generation, GenerationRequest, Platform, Tone};

    #[tokio::test]
    async fn deletes_once_then_reports_not_found() {
        let repo = Arc::new(InMemoryGenerationRepository::new());
        let request = GenerationRequest::new("coffee", Platform::TikTok, Tone::Funny).unwrap();
        let generation = Generation::new(&request, complete_result());
        repo.save(&generation).await.unwrap();

        let use_case = DeleteGenerationUseCase::new(repo.clone());
        use_case.execute(generation.id()).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        let err = use_case.execute(generation.id()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
