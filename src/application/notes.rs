//! Note store use case
//!
//! Owns the authoritative note collection: hydrate from storage at
//! startup, create and delete with synchronous re-persistence, and
//! case-insensitive substring search.

use thiserror::Error;

use crate::domain::note::{Note, NoteId};

use super::ports::{NoteStorage, StorageError};

/// Errors from note store operations
#[derive(Debug, Clone, Error)]
pub enum NoteStoreError {
    /// A committed note must carry non-empty content. Enforced here so
    /// no caller can bypass the invariant.
    #[error("Note content cannot be empty")]
    EmptyContent,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Authoritative store for the note collection.
///
/// The collection is ordered newest-first by insertion: `create`
/// always prepends. Every mutation persists the whole collection
/// before returning; when the write fails, the in-memory change is
/// rolled back so memory and storage never diverge.
pub struct NoteStore<S: NoteStorage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: NoteStorage> NoteStore<S> {
    /// Load the persisted collection into a new store.
    ///
    /// Read or parse failures fall back to an empty collection; the
    /// failure is logged but never surfaced to the user.
    pub async fn hydrate(storage: S) -> Self {
        let notes = match storage.load().await {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("could not hydrate notes, starting empty: {e}");
                Vec::new()
            }
        };
        Self { storage, notes }
    }

    /// Get the full collection, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Create a note from the given content and persist the collection.
    ///
    /// # Returns
    /// The newly created note, or `EmptyContent` for empty input, or
    /// the storage error when the write fails (in which case the
    /// collection is left unchanged).
    pub async fn create(&mut self, content: &str) -> Result<Note, NoteStoreError> {
        if content.is_empty() {
            return Err(NoteStoreError::EmptyContent);
        }

        let note = Note::new(content);
        self.notes.insert(0, note.clone());

        if let Err(e) = self.storage.save(&self.notes).await {
            // Roll back so memory matches what is actually persisted
            self.notes.remove(0);
            return Err(e.into());
        }

        Ok(note)
    }

    /// Delete the note with the given id and persist the collection.
    ///
    /// # Returns
    /// `true` when a note was removed, `false` when no note matched
    /// (a no-op, not an error). A failed write rolls the removal back.
    pub async fn delete(&mut self, id: NoteId) -> Result<bool, NoteStoreError> {
        let Some(position) = self.notes.iter().position(|note| note.id == id) else {
            return Ok(false);
        };

        let removed = self.notes.remove(position);

        if let Err(e) = self.storage.save(&self.notes).await {
            self.notes.insert(position, removed);
            return Err(e.into());
        }

        Ok(true)
    }

    /// Filter the collection by a search term.
    ///
    /// An empty query returns the full collection unfiltered. Otherwise
    /// notes whose content contains the query case-insensitively are
    /// returned, preserving collection order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }

        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.content.to_lowercase().contains(&needle))
            .collect()
    }
}
