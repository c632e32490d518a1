//! Note capture use case
//!
//! Drives one note-creation interaction against the speech engine and
//! notification ports, and hands the finished draft to the note store
//! at commit. The engine is an exclusive resource: this use case owns
//! the binding and releases it on stop or replaces it on re-acquire.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::session::{CaptureMode, CaptureSession, InvalidModeTransition};

use super::notes::{NoteStore, NoteStoreError};
use super::ports::{
    NotificationLevel, Notifier, NoteStorage, SpeechEngine, SpeechError, TranscriptEvent,
};
use crate::domain::note::Note;

/// Title used for all capture notifications
const NOTIFY_TITLE: &str = "VoiceNotes";

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidModeTransition),

    /// Commit was attempted with nothing in the draft. The user has
    /// already been warned when this is returned.
    #[error("Nothing to save: the draft is empty")]
    EmptyDraft,

    #[error(transparent)]
    Store(#[from] NoteStoreError),
}

/// Capture session use case.
///
/// Wraps the [`CaptureSession`] state machine with the side effects the
/// dialog needs: capability checks, engine binding, transcript events,
/// user-facing toasts, and the single handoff to the note store.
pub struct CaptureUseCase<E, N>
where
    E: SpeechEngine,
    N: Notifier,
{
    engine: E,
    notifier: N,
    locale: String,
    session: CaptureSession,
    events: Option<mpsc::UnboundedReceiver<TranscriptEvent>>,
}

impl<E, N> CaptureUseCase<E, N>
where
    E: SpeechEngine,
    N: Notifier,
{
    /// Create a new capture use case with an idle session
    pub fn new(engine: E, notifier: N, locale: impl Into<String>) -> Self {
        Self {
            engine,
            notifier,
            locale: locale.into(),
            session: CaptureSession::new(),
            events: None,
        }
    }

    /// Get the current capture mode
    pub fn mode(&self) -> CaptureMode {
        self.session.mode()
    }

    /// Get the current draft text
    pub fn draft(&self) -> &str {
        self.session.draft()
    }

    /// Switch to manual text entry
    pub fn start_manual_entry(&mut self) -> Result<(), CaptureError> {
        self.session.start_manual_entry()?;
        Ok(())
    }

    /// Replace the draft during manual entry
    pub fn edit_draft(&mut self, text: &str) -> Result<(), CaptureError> {
        self.session.edit_draft(text)?;
        Ok(())
    }

    /// Start voice capture.
    ///
    /// When the engine is unavailable, an error toast is raised, the
    /// session stays at the entry prompt, and no engine is bound. When
    /// an engine is already bound it is stopped first so that only one
    /// transcription is ever live.
    pub async fn start_recording(&mut self) -> Result<(), CaptureError> {
        if !self.engine.is_available() {
            let _ = self
                .notifier
                .notify(
                    NOTIFY_TITLE,
                    "Speech recognition is not available on this system.",
                    NotificationLevel::Error,
                )
                .await;
            return Err(SpeechError::Unavailable.into());
        }

        self.session.start_recording()?;

        if self.engine.is_active() {
            // Exclusive binding: release any leaked engine before
            // starting a new transcription
            if let Err(e) = self.engine.stop().await {
                log::warn!("could not stop previously bound engine: {e}");
            }
            self.events = None;
        }

        match self.engine.start(&self.locale).await {
            Ok(receiver) => {
                self.events = Some(receiver);
                Ok(())
            }
            Err(e) => {
                // Nothing got bound; put the session back at the prompt
                let _ = self.session.cancel_recording();
                let _ = self
                    .notifier
                    .notify(
                        NOTIFY_TITLE,
                        "Could not start the speech engine.",
                        NotificationLevel::Error,
                    )
                    .await;
                Err(e.into())
            }
        }
    }

    /// Wait for the next event from the bound engine.
    ///
    /// Returns `None` when no engine is bound or when the engine has
    /// finished on its own.
    pub async fn recv_event(&mut self) -> Option<TranscriptEvent> {
        match self.events.as_mut() {
            Some(receiver) => receiver.recv().await,
            None => None,
        }
    }

    /// Apply one engine event to the session.
    ///
    /// Transcripts replace the draft; engine errors are logged and
    /// otherwise ignored, leaving the session state untouched.
    pub fn apply_event(&mut self, event: TranscriptEvent) -> Result<(), CaptureError> {
        match event {
            TranscriptEvent::Transcript(text) => {
                self.session.apply_transcript(&text)?;
            }
            TranscriptEvent::Error(e) => {
                log::warn!("speech engine error: {e}");
            }
        }
        Ok(())
    }

    /// Stop voice capture, releasing the engine and keeping the draft
    pub async fn stop_recording(&mut self) -> Result<(), CaptureError> {
        self.session.stop_recording()?;
        self.events = None;
        if let Err(e) = self.engine.stop().await {
            log::warn!("speech engine did not stop cleanly: {e}");
        }
        Ok(())
    }

    /// Commit the draft as a new note.
    ///
    /// Not callable while recording. An empty draft raises a warning
    /// toast and leaves the session mode unchanged. On success the note
    /// is created in the store, the session resets to the entry prompt,
    /// and a success toast is raised. This is the only handoff point
    /// between the capture session and the note store.
    pub async fn commit<S: NoteStorage>(
        &mut self,
        store: &mut NoteStore<S>,
    ) -> Result<Note, CaptureError> {
        if self.session.is_recording() {
            return Err(InvalidModeTransition {
                current_mode: CaptureMode::Recording,
                action: "save the draft".to_string(),
            }
            .into());
        }

        match store.create(self.session.draft()).await {
            Ok(note) => {
                self.session.reset();
                let _ = self
                    .notifier
                    .notify(NOTIFY_TITLE, "Note saved.", NotificationLevel::Success)
                    .await;
                Ok(note)
            }
            Err(NoteStoreError::EmptyContent) => {
                let _ = self
                    .notifier
                    .notify(
                        NOTIFY_TITLE,
                        "Add some content before saving the note.",
                        NotificationLevel::Warning,
                    )
                    .await;
                Err(CaptureError::EmptyDraft)
            }
            Err(e) => Err(e.into()),
        }
    }
}
