//! Notification infrastructure module
//!
//! Provides a terminal notifier (default) and desktop notifications
//! via notify-rust when enabled.

mod notify_rust;
mod terminal;

pub use notify_rust::NotifyRustNotifier;
pub use terminal::TerminalNotifier;

use crate::application::ports::Notifier;

/// Create the notifier for the current configuration
pub fn create_notifier(desktop: bool) -> Box<dyn Notifier> {
    if desktop {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(TerminalNotifier::new())
    }
}
