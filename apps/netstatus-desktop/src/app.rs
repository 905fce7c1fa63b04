//! Application orchestrator — wires probes, tray, and notifiers together.

use std::sync::Arc;

use netstatus_monitor::{Poller, event_loop};
use netstatus_notify::{CommandPlayer, DesktopNotifications, Notifier};
use netstatus_probe::Prober;
use netstatus_state::Preferences;
use netstatus_tray::{TrayConfig, TrayEvent, TrayHandle};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::shell;

/// Capacity of the shell → core event channel.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Runs the monitor until shutdown is requested.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    // -- Preferences --
    let prefs = Arc::new(Preferences::new(
        config.sounds_enabled,
        config.notifications_enabled,
    ));

    // -- Tray --
    let tray_config = TrayConfig {
        sounds_enabled: config.sounds_enabled,
        notifications_enabled: config.notifications_enabled,
        ..TrayConfig::default()
    };
    let (tray, update_rx) = TrayHandle::new();
    let (event_tx, event_rx) = mpsc::channel::<TrayEvent>(EVENT_CHANNEL_CAPACITY);
    let shell_task = tokio::spawn(shell::run(tray_config, update_rx));

    // The sender would be handed to the platform shell; the headless shell
    // emits no events, so Ctrl-C is the effective quit path. Held open so
    // the event sequencer does not see a closed channel.
    let _shell_events = event_tx;

    // -- Notifier --
    let notifier = Notifier::new(
        Box::new(DesktopNotifications),
        Box::new(CommandPlayer::new(config.audio_player.clone())),
    );

    // -- Prober --
    let prober = Prober::new(config.probe_config())?;

    // -- Sequencers --
    let events_task = tokio::spawn(event_loop(
        event_rx,
        Arc::clone(&prefs),
        tray.update_sender(),
        cancel.clone(),
    ));

    let poller = Poller::new(prober, notifier, prefs, tray, config.poll_interval());
    let poll_task = tokio::spawn(poller.run(cancel.clone()));

    tracing::info!("NetStatus ready");

    // -- Main: wait for quit --
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!("shutdown signal received");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("SIGINT received, shutting down");
            cancel.cancel();
        }
    }

    // Both sequencers finish their current iteration before the shell
    // resource goes away.
    let _ = poll_task.await;
    let _ = events_task.await;
    let _ = shell_task.await;

    Ok(())
}
