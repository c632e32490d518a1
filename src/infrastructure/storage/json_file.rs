//! JSON file storage adapter
//!
//! Persists the whole note collection as one JSON array in a single
//! file. The file is read wholesale on hydrate and overwritten
//! wholesale on every mutation; there is no versioning or migration.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{NoteStorage, StorageError};
use crate::domain::note::Note;

/// File-backed note storage
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage at the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn parse_json(content: &str) -> Result<Vec<Note>, StorageError> {
        serde_json::from_str(content).map_err(|e| StorageError::ParseFailed(e.to_string()))
    }

    fn to_json(notes: &[Note]) -> Result<String, StorageError> {
        serde_json::to_string_pretty(notes).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl NoteStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Note>, StorageError> {
        if !self.path.exists() {
            // Nothing persisted yet
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        Self::parse_json(&content)
    }

    async fn save(&self, notes: &[Note]) -> Result<(), StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let content = Self::to_json(notes)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}
