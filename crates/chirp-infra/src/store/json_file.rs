use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use chirp_core::error::StoreError;
use chirp_core::ports::CollectionStore;

/// Collection store backed by a single JSON array file.
///
/// `load` reads and parses the whole file; `save` serializes the whole
/// collection and rewrites the file in place. The rewrite truncates first,
/// so a crash mid-write can leave the file corrupt - there is no temp-file
/// swap and no OS-level lock against other processes.
///
/// The file is never created here. A fresh deployment seeds each collection
/// with `[]` externally; a missing file surfaces as [`StoreError::Missing`]
/// on every call.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::Missing(self.path.display().to_string())
            } else {
                StoreError::Io(e.to_string())
            }
        })?;

        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "collection rewritten");
        Ok(())
    }
}
