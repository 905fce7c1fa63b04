//! Tray handle and the channel protocol between core and shell.

use tokio::sync::mpsc;

use crate::menu::{CheckStatus, CheckTarget, IconKind};

/// Capacity of the core → shell update channel.
const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Events emitted by the tray shell to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// User clicked the "Sounds" checkbox.
    SoundsToggled,
    /// User clicked the "Notifications" checkbox.
    NotificationsToggled,
    /// User clicked "Quit" in the context menu.
    QuitRequested,
}

/// Updates sent from the core to the tray shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayUpdate {
    /// Replace the global tray icon.
    Icon(IconKind),
    /// A check's menu line changed.
    Check {
        target: CheckTarget,
        status: CheckStatus,
    },
    /// New state of the "Sounds" checkbox.
    SoundsEnabled(bool),
    /// New state of the "Notifications" checkbox.
    NotificationsEnabled(bool),
    /// Request shell shutdown.
    Shutdown,
}

/// Handle for driving the tray shell from the core.
///
/// Check-line refreshes are fire-and-forget: if the shell lags behind the
/// bounded channel the refresh is dropped and the next cycle sends a fresh
/// one. Icon changes and shutdown are sent only on transitions and quit, so
/// those sends wait for channel space instead of dropping.
#[derive(Debug, Clone)]
pub struct TrayHandle {
    update_tx: mpsc::Sender<TrayUpdate>,
}

impl TrayHandle {
    /// Creates the handle and the shell-side receiver.
    pub fn new() -> (Self, mpsc::Receiver<TrayUpdate>) {
        let (update_tx, update_rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        (Self { update_tx }, update_rx)
    }

    /// Clones the raw update sender for another task (checkbox forwarding
    /// from the event sequencer).
    pub fn update_sender(&self) -> mpsc::Sender<TrayUpdate> {
        self.update_tx.clone()
    }

    /// Sets the global tray icon. Waits for channel space; a lost icon
    /// update would not be corrected until the next transition.
    pub async fn set_icon(&self, icon: IconKind) {
        let _ = self.update_tx.send(TrayUpdate::Icon(icon)).await;
    }

    /// Refreshes one check's menu line from this cycle's probe result.
    pub fn update_check(&self, target: CheckTarget, outcome: Result<(), String>) {
        let status = match outcome {
            Ok(()) => CheckStatus::passed("OK"),
            Err(detail) => CheckStatus::failed(detail),
        };
        let _ = self.update_tx.try_send(TrayUpdate::Check { target, status });
    }

    /// Requests shell shutdown. Waits for channel space so the request is
    /// not lost behind queued refreshes.
    pub async fn shutdown(&self) {
        let _ = self.update_tx.send(TrayUpdate::Shutdown).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_icon_reaches_shell() {
        let (handle, mut rx) = TrayHandle::new();
        handle.set_icon(IconKind::Error).await;
        assert_eq!(rx.recv().await, Some(TrayUpdate::Icon(IconKind::Error)));
    }

    #[tokio::test]
    async fn update_check_maps_outcomes() {
        let (handle, mut rx) = TrayHandle::new();

        handle.update_check(CheckTarget::Dns, Ok(()));
        handle.update_check(CheckTarget::Http, Err("connection refused".into()));

        let first = rx.recv().await.unwrap();
        assert_eq!(
            first,
            TrayUpdate::Check {
                target: CheckTarget::Dns,
                status: CheckStatus::passed("OK"),
            }
        );

        let second = rx.recv().await.unwrap();
        assert_eq!(
            second,
            TrayUpdate::Check {
                target: CheckTarget::Http,
                status: CheckStatus::failed("connection refused"),
            }
        );
    }

    #[tokio::test]
    async fn shutdown_reaches_shell() {
        let (handle, mut rx) = TrayHandle::new();
        handle.shutdown().await;
        assert_eq!(rx.recv().await, Some(TrayUpdate::Shutdown));
    }

    #[tokio::test]
    async fn line_refreshes_are_dropped_when_shell_lags() {
        let (handle, mut rx) = TrayHandle::new();
        // Overfill the bounded channel; the handle must not block or panic.
        for _ in 0..64 {
            handle.update_check(CheckTarget::Dns, Ok(()));
        }
        // Drain whatever made it through.
        let mut drained = 0;
        while rx.try_recv().is_ok() {
            drained += 1;
        }
        assert!(drained <= 16);
    }

    #[tokio::test]
    async fn icon_update_survives_a_lagging_shell() {
        let (handle, mut rx) = TrayHandle::new();
        // Fill the channel with routine line refreshes.
        for _ in 0..16 {
            handle.update_check(CheckTarget::Dns, Ok(()));
        }

        // The icon send waits for space rather than dropping.
        let sender = handle.clone();
        let send_task = tokio::spawn(async move {
            sender.set_icon(IconKind::Error).await;
        });

        let icon = tokio::time::timeout(std::time::Duration::from_secs(2), async {
            loop {
                match rx.recv().await {
                    Some(TrayUpdate::Icon(icon)) => break icon,
                    Some(_) => {}
                    None => panic!("channel closed before the icon arrived"),
                }
            }
        })
        .await
        .expect("icon update should arrive once the shell drains");

        assert_eq!(icon, IconKind::Error);
        send_task.await.unwrap();
    }

    #[tokio::test]
    async fn cloned_sender_feeds_same_shell() {
        let (handle, mut rx) = TrayHandle::new();
        let tx = handle.update_sender();
        tx.send(TrayUpdate::SoundsEnabled(false)).await.unwrap();
        assert_eq!(rx.recv().await, Some(TrayUpdate::SoundsEnabled(false)));
    }
}
