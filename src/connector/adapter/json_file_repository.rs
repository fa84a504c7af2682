use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{GenerationRepository, UsageRepository};
use crate::domain::{Generation, GenerationError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    generations_count: u64,
    #[serde(default)]
    generations: Vec<Generation>,
}

/// History and usage counter persisted to a single JSON document.
///
/// Every operation reads the file, applies the change and writes it back while
/// holding one lock, so concurrent callers in the same process serialize.
pub struct JsonFileRepository {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<StoreFile, GenerationError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                GenerationError::storage(format!("corrupt store {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreFile::default()),
            Err(e) => Err(GenerationError::storage(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn store(&self, file: &StoreFile) -> Result<(), GenerationError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GenerationError::storage(e.to_string()))?;
        }
        let bytes = serde_json::to_vec_pretty(file)
            .map_err(|e| GenerationError::storage(e.to_string()))?;
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            GenerationError::storage(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl GenerationRepository for JsonFileRepository {
    async fn save(&self, generation: &Generation) -> Result<(), GenerationError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        file.generations.push(generation.clone());
        self.store(&file).await?;
        debug!("Saved generation {} to {}", generation.id(), self.path.display());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Generation>, GenerationError> {
        let _guard = self.lock.lock().await;
        let file = self.load().await?;
        Ok(file.generations.into_iter().find(|g| g.id() == id))
    }

    async fn list(&self) -> Result<Vec<Generation>, GenerationError> {
        let _guard = self.lock.lock().await;
        let file = self.load().await?;
        Ok(file.generations.into_iter().rev().collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, GenerationError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        let before = file.generations.len();
        file.generations.retain(|g| g.id() != id);
        if file.generations.len() == before {
            return Ok(false);
        }
        self.store(&file).await?;
        debug!("Deleted generation {} from {}", id, self.path.display());
        Ok(true)
    }
}

#[async_trait]
impl UsageRepository for JsonFileRepository {
    async fn generations_count(&self) -> Result<u64, GenerationError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.generations_count)
    }

    async fn increment(&self) -> Result<u64, GenerationError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        file.generations_count = file.generations_count.saturating_add(1);
        self.store(&file).await?;
        Ok(file.generations_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::fixtures::complete_result;
    use crate::domain::{GenerationRequest, Platform, Tone};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, JsonFileRepository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested").join("store.json"));
        (dir, repo)
    }

    fn generation(topic: &str) -> Generation {
        let request = GenerationRequest::new(topic, Platform::TikTok, Tone::Funny).unwrap();
        Generation::new(&request, complete_result())
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let (_dir, repo) = temp_store();
        assert!(GenerationRepository::list(&repo).await.unwrap().is_empty());
        assert_eq!(repo.generations_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn saved_generations_survive_a_new_handle() {
        let (_dir, repo) = temp_store();
        let generation = generation("coffee");
        repo.save(&generation).await.unwrap();
        repo.increment().await.unwrap();

        let reopened = JsonFileRepository::new(repo.path());
        let listed = GenerationRepository::list(&reopened).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), generation.id());
        assert_eq!(listed[0].result(), &complete_result());
        assert_eq!(reopened.generations_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_persists_and_keeps_the_counter() {
        let (_dir, repo) = temp_store();
        let first = generation("first");
        let second = generation("second");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.increment().await.unwrap();
        repo.increment().await.unwrap();

        assert!(repo.delete(first.id()).await.unwrap());
        assert!(!repo.delete("no-such-id").await.unwrap());

        let reopened = JsonFileRepository::new(repo.path());
        let listed = GenerationRepository::list(&reopened).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), second.id());
        assert_eq!(reopened.generations_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let (_dir, repo) = temp_store();
        std::fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        std::fs::write(repo.path(), b"{not json").unwrap();

        let err = GenerationRepository::list(&repo).await.unwrap_err();
        assert!(matches!(err, GenerationError::StorageError(_)));
    }
}
