//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod notifier;
pub mod speech;
pub mod storage;

// Re-export common types
pub use config::ConfigStore;
pub use notifier::{NotificationError, NotificationLevel, Notifier};
pub use speech::{SpeechEngine, SpeechError, TranscriptEvent};
pub use storage::{NoteStorage, StorageError};
