use async_trait::async_trait;

use crate::error::StoreError;

/// Port over the durable form of one collection.
///
/// There is no record-level access: implementations read and replace the
/// collection wholesale. Callers are expected to hold the whole sequence in
/// memory between `load` and `save`.
#[async_trait]
pub trait CollectionStore<T>: Send + Sync {
    /// Read every record in the collection.
    ///
    /// Fails if the backing storage is missing, unreadable, or does not
    /// contain a well-formed sequence of records.
    async fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the collection's durable content with `records`.
    async fn save(&self, records: &[T]) -> Result<(), StoreError>;
}
