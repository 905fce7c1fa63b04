//! Event sequencer: tray toggles and quit.

use std::sync::Arc;

use netstatus_state::Preferences;
use netstatus_tray::{TrayEvent, TrayUpdate};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Consumes tray events until quit or cancellation.
///
/// Toggle events flip the shared preference flag and forward the new
/// checkbox state back to the shell. Quit cancels the process-wide token and
/// returns. A closed event channel (shell gone) also ends the loop.
pub async fn event_loop(
    mut events: mpsc::Receiver<TrayEvent>,
    prefs: Arc<Preferences>,
    updates: mpsc::Sender<TrayUpdate>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = events.recv() => match event {
                Some(TrayEvent::SoundsToggled) => {
                    let enabled = prefs.toggle_sounds();
                    tracing::debug!(enabled, "sounds toggled");
                    let _ = updates.send(TrayUpdate::SoundsEnabled(enabled)).await;
                }
                Some(TrayEvent::NotificationsToggled) => {
                    let enabled = prefs.toggle_notifications();
                    tracing::debug!(enabled, "notifications toggled");
                    let _ = updates.send(TrayUpdate::NotificationsEnabled(enabled)).await;
                }
                Some(TrayEvent::QuitRequested) => {
                    tracing::info!("quit requested via tray");
                    cancel.cancel();
                    break;
                }
                None => break,
            }
        }
    }

    tracing::debug!("event sequencer stopping");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn harness() -> (
        mpsc::Sender<TrayEvent>,
        Arc<Preferences>,
        mpsc::Receiver<TrayUpdate>,
        CancellationToken,
        tokio::task::JoinHandle<()>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (update_tx, update_rx) = mpsc::channel(16);
        let prefs = Arc::new(Preferences::default());
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(event_loop(
            event_rx,
            Arc::clone(&prefs),
            update_tx,
            cancel.clone(),
        ));
        (event_tx, prefs, update_rx, cancel, handle)
    }

    #[tokio::test]
    async fn toggle_flips_pref_and_forwards_checkbox_state() {
        let (event_tx, prefs, mut update_rx, cancel, handle) = harness();

        event_tx.send(TrayEvent::SoundsToggled).await.unwrap();
        assert_eq!(update_rx.recv().await, Some(TrayUpdate::SoundsEnabled(false)));
        assert!(!prefs.sounds_enabled());

        event_tx.send(TrayEvent::NotificationsToggled).await.unwrap();
        assert_eq!(
            update_rx.recv().await,
            Some(TrayUpdate::NotificationsEnabled(false))
        );
        assert!(!prefs.notifications_enabled());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn double_toggle_restores_pref() {
        let (event_tx, prefs, mut update_rx, cancel, handle) = harness();

        event_tx.send(TrayEvent::SoundsToggled).await.unwrap();
        event_tx.send(TrayEvent::SoundsToggled).await.unwrap();
        assert_eq!(update_rx.recv().await, Some(TrayUpdate::SoundsEnabled(false)));
        assert_eq!(update_rx.recv().await, Some(TrayUpdate::SoundsEnabled(true)));
        assert!(prefs.sounds_enabled());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn quit_cancels_the_token() {
        let (event_tx, _prefs, _update_rx, cancel, handle) = harness();

        event_tx.send(TrayEvent::QuitRequested).await.unwrap();
        tokio::time::timeout(Duration::from_secs(2), cancel.cancelled())
            .await
            .expect("quit should cancel the token");
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn closed_channel_ends_the_loop() {
        let (event_tx, _prefs, _update_rx, _cancel, handle) = harness();

        drop(event_tx);
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("loop should end when the shell goes away")
            .expect("no panic");
    }

    #[tokio::test]
    async fn cancellation_ends_the_loop() {
        let (_event_tx, _prefs, _update_rx, cancel, handle) = harness();

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("loop should observe cancellation")
            .expect("no panic");
    }
}
