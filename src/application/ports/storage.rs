//! Note storage port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::note::Note;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read notes: {0}")]
    ReadFailed(String),

    #[error("Failed to parse stored notes: {0}")]
    ParseFailed(String),

    #[error("Failed to write notes: {0}")]
    WriteFailed(String),
}

/// Port for persisting the note collection.
///
/// The collection is stored as a single slot: `load` reads the whole
/// collection, `save` overwrites it wholesale. There is no incremental
/// persistence and no versioning scheme.
#[async_trait]
pub trait NoteStorage: Send + Sync {
    /// Load the persisted collection.
    ///
    /// # Returns
    /// The stored notes in order, or an empty collection when nothing
    /// has been persisted yet.
    async fn load(&self) -> Result<Vec<Note>, StorageError>;

    /// Persist the full collection, replacing any previous state.
    async fn save(&self, notes: &[Note]) -> Result<(), StorageError>;
}
