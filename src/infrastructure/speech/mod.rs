//! Speech engine infrastructure module
//!
//! Provides the subprocess-backed engine when a speech-to-text command
//! is configured, and a capability-absent fallback when it is not.

mod command;
mod unsupported;

pub use command::CommandSpeechEngine;
pub use unsupported::UnsupportedSpeechEngine;

use crate::application::ports::SpeechEngine;
use crate::domain::config::AppConfig;

/// Create the speech engine for the current configuration
pub fn create_engine(config: &AppConfig) -> Box<dyn SpeechEngine> {
    match config.speech_command_or_none() {
        Some(command_line) => Box::new(CommandSpeechEngine::from_command_line(command_line)),
        None => Box::new(UnsupportedSpeechEngine::new()),
    }
}
