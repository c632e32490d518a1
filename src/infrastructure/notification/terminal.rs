//! Terminal notification adapter
//!
//! Renders toasts as colored stderr lines. This is the default
//! surface; desktop notifications are opt-in via config or flag.

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{NotificationError, NotificationLevel, Notifier};

/// Notifier that prints to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(
        &self,
        _title: &str,
        message: &str,
        level: NotificationLevel,
    ) -> Result<(), NotificationError> {
        match level {
            NotificationLevel::Info => eprintln!("{} {}", "ℹ".cyan(), message),
            NotificationLevel::Success => eprintln!("{} {}", "✓".green(), message),
            NotificationLevel::Warning => eprintln!("{} {}", "⚠".yellow(), message),
            NotificationLevel::Error => eprintln!("{} {}", "✗".red(), message),
        }
        Ok(())
    }
}
