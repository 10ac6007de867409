//! User-facing notifications.

mod banner;

pub use banner::{Banner, BannerBoard, BannerId, BannerKind};

use std::time::Duration;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Default duration for inline banners.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(5000);

/// Notification severity (affects styling)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text to display.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// How long to show the notification.
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Set a custom duration for this notification.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Notification {
    fn from(message: String) -> Self {
        Notification::info(message)
    }
}

impl From<&str> for Notification {
    fn from(message: &str) -> Self {
        Notification::info(message)
    }
}

/// Receiver of notifications.
///
/// Fire-and-forget: the sink owns display and dismissal.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that only writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => log::error!("{}", notification.message),
            Severity::Warning => log::warn!("{}", notification.message),
            Severity::Info | Severity::Success => log::info!("{}", notification.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let n = Notification::error("Failed");
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.duration, DEFAULT_TOAST_DURATION);

        let n = Notification::success("Saved").with_duration(Duration::from_secs(1));
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.duration, Duration::from_secs(1));
    }

    #[test]
    fn test_from_str_is_info() {
        let n: Notification = "hello".into();
        assert_eq!(n.severity, Severity::Info);
        assert_eq!(n.message, "hello");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
