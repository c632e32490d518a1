//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, subprocess speech engines,
//! and the desktop notification service.

pub mod config;
pub mod notification;
pub mod speech;
pub mod storage;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier, TerminalNotifier};
pub use speech::{create_engine, CommandSpeechEngine, UnsupportedSpeechEngine};
pub use storage::JsonFileStorage;
