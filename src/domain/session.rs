//! Capture session state machine
//!
//! One capture session covers a single note-creation interaction,
//! whether the user types the note or dictates it. The session owns
//! the draft buffer and is discarded once the note is committed.

use std::fmt;
use thiserror::Error;

/// Capture session modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureMode {
    /// Entry prompt: the user has not chosen voice or text yet
    #[default]
    Onboarding,
    /// Free-text editing (also the mode after a recording stops)
    ManualEntry,
    /// Live transcription is feeding the draft buffer
    Recording,
}

impl CaptureMode {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::ManualEntry => "manual entry",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid mode transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid capture transition: cannot {action} while in {current_mode} mode")]
pub struct InvalidModeTransition {
    pub current_mode: CaptureMode,
    pub action: String,
}

/// Capture session entity.
/// Manages mode transitions for one note-creation interaction.
///
/// State machine:
///   ONBOARDING -> MANUAL_ENTRY (start_manual_entry)
///   ONBOARDING -> RECORDING (start_recording)
///   RECORDING -> MANUAL_ENTRY (stop_recording, draft preserved)
///   RECORDING -> ONBOARDING (stop_recording with empty draft, or cancel_recording)
///   MANUAL_ENTRY -> ONBOARDING (edit_draft with empty text)
///
/// While recording, each interim transcript replaces the whole draft:
/// the engine delivers the full transcript so far, never a delta.
#[derive(Debug, Default)]
pub struct CaptureSession {
    mode: CaptureMode,
    draft: String,
}

impl CaptureSession {
    /// Create a new session at the entry prompt with an empty draft
    pub fn new() -> Self {
        Self {
            mode: CaptureMode::Onboarding,
            draft: String::new(),
        }
    }

    /// Get the current mode
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Get the current draft text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Check if at the entry prompt
    pub fn is_onboarding(&self) -> bool {
        self.mode == CaptureMode::Onboarding
    }

    /// Check if in free-text editing
    pub fn is_manual_entry(&self) -> bool {
        self.mode == CaptureMode::ManualEntry
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.mode == CaptureMode::Recording
    }

    /// Transition from ONBOARDING to MANUAL_ENTRY
    pub fn start_manual_entry(&mut self) -> Result<(), InvalidModeTransition> {
        if self.mode != CaptureMode::Onboarding {
            return Err(InvalidModeTransition {
                current_mode: self.mode,
                action: "start manual entry".to_string(),
            });
        }
        self.mode = CaptureMode::ManualEntry;
        Ok(())
    }

    /// Replace the draft during MANUAL_ENTRY.
    /// Clearing the draft returns the session to the entry prompt.
    pub fn edit_draft(&mut self, text: &str) -> Result<(), InvalidModeTransition> {
        if self.mode != CaptureMode::ManualEntry {
            return Err(InvalidModeTransition {
                current_mode: self.mode,
                action: "edit the draft".to_string(),
            });
        }
        self.draft = text.to_string();
        if self.draft.is_empty() {
            self.mode = CaptureMode::Onboarding;
        }
        Ok(())
    }

    /// Transition from ONBOARDING to RECORDING
    pub fn start_recording(&mut self) -> Result<(), InvalidModeTransition> {
        if self.mode != CaptureMode::Onboarding {
            return Err(InvalidModeTransition {
                current_mode: self.mode,
                action: "start recording".to_string(),
            });
        }
        self.mode = CaptureMode::Recording;
        Ok(())
    }

    /// Replace the draft with the full transcript so far.
    /// Only valid while RECORDING.
    pub fn apply_transcript(&mut self, transcript: &str) -> Result<(), InvalidModeTransition> {
        if self.mode != CaptureMode::Recording {
            return Err(InvalidModeTransition {
                current_mode: self.mode,
                action: "apply a transcript".to_string(),
            });
        }
        self.draft = transcript.to_string();
        Ok(())
    }

    /// Transition from RECORDING back to free editing, keeping the draft.
    /// Falls back to the entry prompt when nothing was transcribed.
    pub fn stop_recording(&mut self) -> Result<(), InvalidModeTransition> {
        if self.mode != CaptureMode::Recording {
            return Err(InvalidModeTransition {
                current_mode: self.mode,
                action: "stop recording".to_string(),
            });
        }
        self.mode = if self.draft.is_empty() {
            CaptureMode::Onboarding
        } else {
            CaptureMode::ManualEntry
        };
        Ok(())
    }

    /// Transition from RECORDING to ONBOARDING, discarding the draft
    pub fn cancel_recording(&mut self) -> Result<(), InvalidModeTransition> {
        if self.mode != CaptureMode::Recording {
            return Err(InvalidModeTransition {
                current_mode: self.mode,
                action: "cancel recording".to_string(),
            });
        }
        self.draft.clear();
        self.mode = CaptureMode::Onboarding;
        Ok(())
    }

    /// Reset to the entry prompt with an empty draft.
    /// Used after a successful commit.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.mode = CaptureMode::Onboarding;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_onboarding_with_empty_draft() {
        let session = CaptureSession::new();
        assert!(session.is_onboarding());
        assert!(!session.is_manual_entry());
        assert!(!session.is_recording());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn start_manual_entry_from_onboarding() {
        let mut session = CaptureSession::new();
        assert!(session.start_manual_entry().is_ok());
        assert!(session.is_manual_entry());
    }

    #[test]
    fn start_manual_entry_while_recording_fails() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();

        let err = session.start_manual_entry().unwrap_err();
        assert_eq!(err.current_mode, CaptureMode::Recording);
        assert!(err.action.contains("manual entry"));
    }

    #[test]
    fn edit_draft_replaces_text() {
        let mut session = CaptureSession::new();
        session.start_manual_entry().unwrap();

        session.edit_draft("buy milk").unwrap();
        assert_eq!(session.draft(), "buy milk");
        assert!(session.is_manual_entry());
    }

    #[test]
    fn clearing_draft_returns_to_onboarding() {
        let mut session = CaptureSession::new();
        session.start_manual_entry().unwrap();
        session.edit_draft("something").unwrap();

        session.edit_draft("").unwrap();
        assert!(session.is_onboarding());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn edit_draft_from_onboarding_fails() {
        let mut session = CaptureSession::new();
        let err = session.edit_draft("text").unwrap_err();
        assert_eq!(err.current_mode, CaptureMode::Onboarding);
    }

    #[test]
    fn start_recording_from_onboarding() {
        let mut session = CaptureSession::new();
        assert!(session.start_recording().is_ok());
        assert!(session.is_recording());
    }

    #[test]
    fn start_recording_from_manual_entry_fails() {
        let mut session = CaptureSession::new();
        session.start_manual_entry().unwrap();

        let err = session.start_recording().unwrap_err();
        assert_eq!(err.current_mode, CaptureMode::ManualEntry);
    }

    #[test]
    fn start_recording_while_recording_fails() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();

        let err = session.start_recording().unwrap_err();
        assert_eq!(err.current_mode, CaptureMode::Recording);
    }

    #[test]
    fn interim_transcripts_replace_not_append() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();

        session.apply_transcript("hel").unwrap();
        session.apply_transcript("hello").unwrap();
        assert_eq!(session.draft(), "hello");
    }

    #[test]
    fn apply_transcript_outside_recording_fails() {
        let mut session = CaptureSession::new();
        let err = session.apply_transcript("hi").unwrap_err();
        assert_eq!(err.current_mode, CaptureMode::Onboarding);
    }

    #[test]
    fn stop_recording_keeps_draft_and_enters_manual_entry() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();
        session.apply_transcript("dictated text").unwrap();

        session.stop_recording().unwrap();
        assert!(session.is_manual_entry());
        assert_eq!(session.draft(), "dictated text");
    }

    #[test]
    fn stop_recording_with_empty_draft_returns_to_onboarding() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();

        session.stop_recording().unwrap();
        assert!(session.is_onboarding());
    }

    #[test]
    fn stop_recording_from_onboarding_fails() {
        let mut session = CaptureSession::new();
        let err = session.stop_recording().unwrap_err();
        assert_eq!(err.current_mode, CaptureMode::Onboarding);
    }

    #[test]
    fn cancel_recording_discards_draft() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();
        session.apply_transcript("partial").unwrap();

        session.cancel_recording().unwrap();
        assert!(session.is_onboarding());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn draft_can_be_edited_after_recording_stops() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();
        session.apply_transcript("dictated").unwrap();
        session.stop_recording().unwrap();

        session.edit_draft("dictated, then edited").unwrap();
        assert_eq!(session.draft(), "dictated, then edited");
    }

    #[test]
    fn reset_clears_draft_and_mode() {
        let mut session = CaptureSession::new();
        session.start_manual_entry().unwrap();
        session.edit_draft("text").unwrap();

        session.reset();
        assert!(session.is_onboarding());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn full_voice_cycle() {
        let mut session = CaptureSession::new();
        session.start_recording().unwrap();
        session.apply_transcript("buy").unwrap();
        session.apply_transcript("buy milk").unwrap();
        session.stop_recording().unwrap();
        assert_eq!(session.draft(), "buy milk");

        session.reset();
        assert!(session.is_onboarding());

        // Can start another cycle
        session.start_recording().unwrap();
        assert!(session.is_recording());
    }

    #[test]
    fn mode_display() {
        assert_eq!(CaptureMode::Onboarding.to_string(), "onboarding");
        assert_eq!(CaptureMode::ManualEntry.to_string(), "manual entry");
        assert_eq!(CaptureMode::Recording.to_string(), "recording");
    }

    #[test]
    fn error_display() {
        let err = InvalidModeTransition {
            current_mode: CaptureMode::Recording,
            action: "start manual entry".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start manual entry"));
        assert!(msg.contains("recording"));
    }
}
