//! Success notifications for todo changes.
//!
//! The reducer never calls a notifier itself; it returns an effect that the
//! store runs, so reducers stay pure and tests can swap the notifier out.

use std::sync::{Mutex, PoisonError};

/// Shown after a todo is added
pub const TODO_ADDED: &str = "Todo added successfully!";
/// Shown after a todo is deleted
pub const TODO_DELETED: &str = "Todo deleted successfully!";
/// Shown after an edit is committed
pub const TODO_UPDATED: &str = "Todo updated successfully!";

/// Receives fire-and-forget success messages
pub trait Notifier {
    /// Announce a successful change
    fn success(&self, message: &str);
}

/// Prints notifications to stdout, for the terminal front-end
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::info!(message, "notification");
        println!("✔ {message}");
    }
}

/// Drops notifications, keeping only a debug log line
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, message: &str) {
        tracing::debug!(message, "notification suppressed");
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message received so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets every message received so far
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.success(TODO_ADDED);
        notifier.success(TODO_DELETED);

        assert_eq!(notifier.messages(), vec![TODO_ADDED, TODO_DELETED]);

        notifier.clear();
        assert!(notifier.messages().is_empty());
    }
}
