//! Domain layer - Core business logic
//!
//! Contains entities, value objects, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod note;
pub mod session;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use note::{Note, NoteId};
pub use session::{CaptureMode, CaptureSession, InvalidModeTransition};
