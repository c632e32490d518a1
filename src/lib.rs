//! VoiceNotes - voice-powered note taking for the terminal
//!
//! This crate provides the core functionality for creating notes by
//! typing or by dictating speech converted to text, searching them,
//! and deleting them. Notes persist locally in a single JSON file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Note entity, capture session state machine, config
//!   value objects, and domain errors
//! - **Application**: Use cases (note store, capture session) and port
//!   interfaces (traits) for storage, speech, notifications, config
//! - **Infrastructure**: Adapter implementations (JSON file storage,
//!   subprocess speech engine, notify-rust, XDG config)
//! - **CLI**: Command-line interface, argument parsing, presenter, and
//!   signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
