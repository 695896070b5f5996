//! In-memory collection store - used as a test substitute for the file store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use chirp_core::error::StoreError;
use chirp_core::ports::CollectionStore;

/// Collection store over a `Vec` behind an async RwLock.
///
/// Starts out seeded (an empty collection is a valid, present collection),
/// matching a file store whose file holds `[]`. Data lives for the process
/// only.
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CollectionStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
