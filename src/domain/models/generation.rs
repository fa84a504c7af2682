use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GenerationRequest, GenerationResult, Platform, Tone};

/// A stored generation: the request that produced it plus the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    id: String,
    topic: String,
    platform: Platform,
    tone: Tone,
    result: GenerationResult,
    created_at: i64,
}

impl Generation {
    pub fn new(request: &GenerationRequest, result: GenerationResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: request.topic().to_string(),
            platform: request.platform().clone(),
            tone: request.tone().clone(),
            result,
            created_at: current_timestamp(),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: String,
        topic: String,
        platform: Platform,
        tone: Tone,
        result: GenerationResult,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            topic,
            platform,
            tone,
            result,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
