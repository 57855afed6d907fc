//! Transient user-facing notifications.

use std::time::{Duration, Instant};

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral feedback (e.g. "Request created").
    Information,
    /// An action succeeded only in part (e.g. saved but not reloaded).
    Warning,
    /// A refused action.
    Error,
}

/// A fire-and-forget message shown in the corner of the screen.
///
/// Notifications never alter application state; they expire on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
    created_at: Instant,
}

impl Notification {
    /// Create a notification with the given severity, timestamped now.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: Instant::now(),
        }
    }

    /// Neutral feedback.
    pub fn information(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Information)
    }

    /// Partial success.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// A refused or failed action.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Styling class.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the notification has been visible for at least `timeout` at `now`.
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= timeout
    }
}

/// Ordered queue of live notifications, newest last.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification; it becomes the latest.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Drop every notification older than `timeout`.
    ///
    /// Returns `true` if anything was removed (the screen needs a redraw).
    pub fn prune(&mut self, now: Instant, timeout: Duration) -> bool {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now, timeout));
        self.items.len() != before
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Most recently pushed notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    /// True when nothing is showing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
