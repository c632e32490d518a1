//! Note entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note
pub type NoteId = Uuid;

/// A persisted note.
///
/// Notes are immutable once created: there is no edit operation,
/// only create and delete. `id` and `created_at` are assigned at
/// creation time and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned at creation
    pub id: NoteId,
    /// Creation timestamp (UTC, serialized as ISO-8601)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Note text. Never empty for a committed note.
    pub content: String,
}

impl Note {
    /// Create a note with a fresh id and the current timestamp.
    ///
    /// Content validation is the Note Store's responsibility; this
    /// constructor does not reject empty content on its own.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            content: content.into(),
        }
    }

    /// Short id prefix for display purposes
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}
