//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors - the collection could not be read or written.
///
/// A store failure aborts the whole operation; there is no retry and no
/// partial-read recovery.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Collection file missing: {0}")]
    Missing(String),

    #[error("Collection read/write failed: {0}")]
    Io(String),

    #[error("Collection content malformed: {0}")]
    Malformed(String),
}
