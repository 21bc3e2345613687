//! User-facing notifications.
//!
//! Components that need to tell the user something report through a
//! [`Notifier`] rather than printing directly, so command glue and tests
//! can substitute sinks.

/// Notification severity, mirroring the alert styles of the web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Operation completed.
    Success,
    /// Operation skipped or degraded; nothing was produced.
    Warning,
    /// Operation failed.
    Danger,
}

/// Sink for transient user-facing notifications.
pub trait Notifier {
    /// Show one notification.
    fn notify(&self, level: Level, message: &str);
}

/// Notifier that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _level: Level, _message: &str) {}
}
