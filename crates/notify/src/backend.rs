//! Desktop notification capability contract and backend.

/// Notification severity, chosen by the transition direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Critical,
}

/// Errors from the notification backend.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification backend error: {0}")]
    Backend(String),
}

/// Capability contract consumed from the OS notification subsystem.
pub trait NotificationBackend: Send + Sync {
    /// Pushes one notification.
    fn push(&self, title: &str, message: &str, urgency: Urgency) -> Result<(), NotifyError>;
}

/// Backend over the desktop notification daemon.
#[derive(Debug, Default)]
pub struct DesktopNotifications;

impl NotificationBackend for DesktopNotifications {
    fn push(&self, title: &str, message: &str, urgency: Urgency) -> Result<(), NotifyError> {
        let mut notification = notify_rust::Notification::new();
        notification.summary(title).body(message);

        // Urgency hints are an XDG concept; other platforms ignore severity.
        #[cfg(all(unix, not(target_os = "macos")))]
        notification.urgency(match urgency {
            Urgency::Normal => notify_rust::Urgency::Normal,
            Urgency::Critical => notify_rust::Urgency::Critical,
        });
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        let _ = urgency;

        notification
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Backend(e.to_string()))
    }
}
