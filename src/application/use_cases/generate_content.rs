use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::{ContentGenerator, GenerationRepository, UsageRepository};
use crate::domain::{Generation, GenerationError, GenerationRequest, GenerationResult};

/// Dashboard-side orchestration around a [`ContentGenerator`].
///
/// Checks the usage limit, runs the generator, then records the generation in
/// history and bumps the usage counter. Bookkeeping failures after a successful
/// generation are logged and do not fail the call. A failed generation leaves
/// history and the counter untouched.
pub struct GenerateContentUseCase {
    generator: Arc<dyn ContentGenerator>,
    history: Option<Arc<dyn GenerationRepository>>,
    usage: Option<Arc<dyn UsageRepository>>,
    usage_limit: Option<u64>,
}

impl GenerateContentUseCase {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            generator,
            history: None,
            usage: None,
            usage_limit: None,
        }
    }

    pub fn with_history(mut self, history: Arc<dyn GenerationRepository>) -> Self {
        self.history = Some(history);
        self
    }

    /// Tracks usage, refusing new generations once `limit` is reached.
    /// A `None` limit counts without refusing.
    pub fn with_usage(mut self, usage: Arc<dyn UsageRepository>, limit: Option<u64>) -> Self {
        self.usage = Some(usage);
        self.usage_limit = limit;
        self
    }

    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let request = request.validated()?;

        if let (Some(usage), Some(limit)) = (&self.usage, self.usage_limit) {
            let count = usage.generations_count().await?;
            if count >= limit {
                info!(count, limit, "Generation refused: usage limit reached");
                return Err(GenerationError::UsageLimitReached { limit });
            }
        }

        let start_time = Instant::now();
        let result = self.generator.generate(&request).await?;
        info!(
            topic = request.topic(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Generation completed"
        );

        if let Some(history) = &self.history {
            let generation = Generation::new(&request, result.clone());
            if let Err(e) = history.save(&generation).await {
                warn!("Failed to save generation: {}", e);
            }
        }

        if let Some(usage) = &self.usage {
            if let Err(e) = usage.increment().await {
                warn!("Failed to update generation count: {}", e);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::connector::{InMemoryGenerationRepository, InMemoryUsageRepository};
    use crate::domain::models::fixtures::complete_result;
    use crate::domain::{Platform, Tone};

    struct FakeGenerator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeGenerator {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for FakeGenerator {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GenerationResult, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(GenerationError::RateLimited)
            } else {
                Ok(complete_result())
            }
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("budget travel", Platform::TikTok, Tone::Viral).unwrap()
    }

    #[tokio::test]
    async fn success_is_recorded_and_counted() {
        let history = Arc::new(InMemoryGenerationRepository::new());
        let usage = Arc::new(InMemoryUsageRepository::new());
        let use_case = GenerateContentUseCase::new(Arc::new(FakeGenerator::ok()))
            .with_history(history.clone())
            .with_usage(usage.clone(), None);

        let result = use_case.execute(request()).await.expect("generation succeeds");
        assert_eq!(result.hooks().len(), 30);

        let stored = history.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].topic(), "budget travel");
        assert_eq!(usage.generations_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn failure_is_not_recorded() {
        let history = Arc::new(InMemoryGenerationRepository::new());
        let usage = Arc::new(InMemoryUsageRepository::new());
        let use_case = GenerateContentUseCase::new(Arc::new(FakeGenerator::failing()))
            .with_history(history.clone())
            .with_usage(usage.clone(), Some(10));

        let err = use_case.execute(request()).await.unwrap_err();
        assert!(err.is_rate_limited());
        assert!(history.list().await.unwrap().is_empty());
        assert_eq!(usage.generations_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn limit_reached_skips_generator() {
        let generator = Arc::new(FakeGenerator::ok());
        let usage = Arc::new(InMemoryUsageRepository::with_count(3));
        let use_case =
            GenerateContentUseCase::new(generator.clone()).with_usage(usage, Some(3));

        let err = use_case.execute(request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::UsageLimitReached { limit: 3 }));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }
}
