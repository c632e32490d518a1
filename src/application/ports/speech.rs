//! Speech engine port interface

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Speech engine errors
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("Speech recognition is not available on this system")]
    Unavailable,

    #[error("Failed to start speech engine: {0}")]
    StartFailed(String),

    #[error("Failed to stop speech engine: {0}")]
    StopFailed(String),
}

/// Event delivered by a running speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// The full transcript accumulated so far. Each event replaces the
    /// previous one; events are never deltas.
    Transcript(String),
    /// Engine-level failure. Recoverable: the session logs it and
    /// keeps recording.
    Error(String),
}

/// Port for continuous speech-to-text.
///
/// The engine is a shared, non-reentrant resource: at most one
/// transcription may be live at a time. Callers must stop a bound
/// engine before starting a new one.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Check whether speech recognition can be used at all.
    /// A `false` here means the voice path is disabled for the session.
    fn is_available(&self) -> bool;

    /// Begin continuous transcription in the given locale.
    ///
    /// # Returns
    /// A channel of interim [`TranscriptEvent`]s. The channel closes
    /// when the engine stops or exits on its own.
    async fn start(
        &self,
        locale: &str,
    ) -> Result<mpsc::UnboundedReceiver<TranscriptEvent>, SpeechError>;

    /// Stop the running transcription and release the engine.
    /// A no-op when nothing is running.
    async fn stop(&self) -> Result<(), SpeechError>;

    /// Check if a transcription is currently live
    fn is_active(&self) -> bool;
}

/// Blanket implementation for boxed engine types
#[async_trait]
impl SpeechEngine for Box<dyn SpeechEngine> {
    fn is_available(&self) -> bool {
        self.as_ref().is_available()
    }

    async fn start(
        &self,
        locale: &str,
    ) -> Result<mpsc::UnboundedReceiver<TranscriptEvent>, SpeechError> {
        self.as_ref().start(locale).await
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        self.as_ref().stop().await
    }

    fn is_active(&self) -> bool {
        self.as_ref().is_active()
    }
}
