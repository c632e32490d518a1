//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default locale for speech recognition
pub const DEFAULT_LOCALE: &str = "en-US";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON file holding the note collection
    pub notes_file: Option<String>,
    /// Locale passed to the speech engine
    pub locale: Option<String>,
    /// External speech-to-text command; recording is unavailable without one
    pub speech_command: Option<String>,
    /// Show desktop notifications instead of terminal messages
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            notes_file: None,
            locale: Some(DEFAULT_LOCALE.to_string()),
            speech_command: None,
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            notes_file: other.notes_file.or(self.notes_file),
            locale: other.locale.or(self.locale),
            speech_command: other.speech_command.or(self.speech_command),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get the notes file path, falling back to the platform data directory
    pub fn notes_path_or_default(&self) -> PathBuf {
        match self.notes_file.as_deref() {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("~/.local/share"))
                .join("voice-notes")
                .join("notes.json"),
        }
    }

    /// Get the speech locale, or the default if not set
    pub fn locale_or_default(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Get the configured speech command, if any.
    /// Blank values count as unset.
    pub fn speech_command_or_none(&self) -> Option<&str> {
        self.speech_command
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.notes_file.is_none());
        assert_eq!(config.locale, Some("en-US".to_string()));
        assert!(config.speech_command.is_none());
        assert_eq!(config.notify, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.notes_file.is_none());
        assert!(config.locale.is_none());
        assert!(config.speech_command.is_none());
        assert!(config.notify.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            notes_file: Some("/base/notes.json".to_string()),
            locale: Some("en-US".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            notes_file: Some("/other/notes.json".to_string()),
            locale: None, // Should not override
            notify: Some(true),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.notes_file, Some("/other/notes.json".to_string()));
        assert_eq!(merged.locale, Some("en-US".to_string())); // Kept from base
        assert_eq!(merged.notify, Some(true));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            speech_command: Some("stt".to_string()),
            notify: Some(true),
            ..Default::default()
        };

        let other = AppConfig::empty();
        let merged = base.merge(other);

        assert_eq!(merged.speech_command, Some("stt".to_string()));
        assert_eq!(merged.notify, Some(true));
    }

    #[test]
    fn notes_path_uses_configured_file() {
        let config = AppConfig {
            notes_file: Some("/tmp/my-notes.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.notes_path_or_default(),
            PathBuf::from("/tmp/my-notes.json")
        );
    }

    #[test]
    fn notes_path_default_is_under_data_dir() {
        let config = AppConfig::empty();
        let path = config.notes_path_or_default();
        assert!(path.to_string_lossy().contains("voice-notes"));
        assert!(path.to_string_lossy().ends_with("notes.json"));
    }

    #[test]
    fn locale_or_default_falls_back() {
        assert_eq!(AppConfig::empty().locale_or_default(), "en-US");
        let config = AppConfig {
            locale: Some("pt-BR".to_string()),
            ..Default::default()
        };
        assert_eq!(config.locale_or_default(), "pt-BR");
    }

    #[test]
    fn blank_speech_command_counts_as_unset() {
        let config = AppConfig {
            speech_command: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.speech_command_or_none().is_none());
    }
}
