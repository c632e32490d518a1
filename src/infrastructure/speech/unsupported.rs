//! Capability-absent speech engine
//!
//! Used when no speech-to-text command is configured. The voice path
//! degrades gracefully: the capability check fails and the capture
//! session surfaces a user-facing error instead of recording.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::{SpeechEngine, SpeechError, TranscriptEvent};

/// Speech engine for hosts without speech recognition
#[derive(Debug, Default)]
pub struct UnsupportedSpeechEngine;

impl UnsupportedSpeechEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechEngine for UnsupportedSpeechEngine {
    fn is_available(&self) -> bool {
        false
    }

    async fn start(
        &self,
        _locale: &str,
    ) -> Result<mpsc::UnboundedReceiver<TranscriptEvent>, SpeechError> {
        Err(SpeechError::Unavailable)
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        Ok(())
    }

    fn is_active(&self) -> bool {
        false
    }
}
