//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::note::Note;

/// Longest draft preview shown while recording
const DRAFT_PREVIEW_CHARS: usize = 60;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.red} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Show the live draft next to the recording indicator
    pub fn update_recording_draft(&self, draft: &str) {
        let flat = draft.replace('\n', " ");
        let preview: String = if flat.chars().count() > DRAFT_PREVIEW_CHARS {
            let tail: String = flat
                .chars()
                .skip(flat.chars().count() - DRAFT_PREVIEW_CHARS)
                .collect();
            format!("…{}", tail)
        } else {
            flat
        };
        self.update_spinner(&format!("Recording… {}", preview));
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (config listing)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{} = {}", key.cyan(), value);
    }

    /// Render one note as a list row
    pub fn note_row(&self, note: &Note) {
        let first_line = note.content.lines().next().unwrap_or("");
        println!(
            "{}  {}  {}",
            note.short_id().dimmed(),
            note.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed(),
            first_line
        );
    }

    /// Render the filtered note list, newest first
    pub fn render_notes(&self, notes: &[&Note], query: &str) {
        if notes.is_empty() {
            if query.is_empty() {
                self.info("No notes yet. Use 'add' or 'record' to create one.");
            } else {
                self.info(&format!("No notes matching \"{}\".", query));
            }
            return;
        }

        for note in notes {
            self.note_row(note);
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
