//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// VoiceNotes - voice-powered note taking for the terminal
#[derive(Parser, Debug)]
#[command(name = "voice-notes")]
#[command(version)]
#[command(about = "Create, search, and delete notes by typing or dictating")]
#[command(long_about = None)]
pub struct Cli {
    /// Path of the JSON file holding the notes
    #[arg(long, value_name = "FILE", env = "VOICE_NOTES_FILE")]
    pub notes_file: Option<String>,

    /// Locale passed to the speech engine (e.g. en-US, pt-BR)
    #[arg(short = 'l', long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Speech-to-text command used for recording
    #[arg(long, value_name = "CMD", env = "VOICE_NOTES_SPEECH_COMMAND")]
    pub speech_command: Option<String>,

    /// Show desktop notifications instead of terminal messages
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Subcommand (defaults to listing all notes)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, optionally filtered by a search term
    List {
        /// Search term (case-insensitive substring match)
        query: Option<String>,
    },
    /// Add a note from arguments, or from stdin when none are given
    Add {
        /// Note content
        content: Vec<String>,
    },
    /// Record a note by voice (Ctrl-C stops the recording)
    Record,
    /// Delete a note by id
    Delete {
        /// Full note id (UUID, as stored in the notes file)
        id: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Config keys users may get/set
pub const VALID_CONFIG_KEYS: &[&str] = &["notes_file", "locale", "speech_command", "notify"];

/// Check whether a config key is recognized
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
