//! Poll sequencer: probe, compare, notify, sleep.

use std::sync::Arc;
use std::time::Duration;

use netstatus_notify::Notifier;
use netstatus_probe::ReachabilityProbe;
use netstatus_state::{Preferences, StateTracker};
use netstatus_tray::{CheckTarget, TrayHandle};
use tokio_util::sync::CancellationToken;

/// Time between probe cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// The poll sequencer.
///
/// Runs one probe cycle immediately, then one per interval until cancelled.
/// Cancellation is observed only between cycles: an in-flight probe finishes
/// under its own timeout, the loop just never schedules another wait.
pub struct Poller<P> {
    probe: P,
    tracker: StateTracker,
    notifier: Notifier,
    prefs: Arc<Preferences>,
    tray: TrayHandle,
    interval: Duration,
}

impl<P: ReachabilityProbe> Poller<P> {
    pub fn new(
        probe: P,
        notifier: Notifier,
        prefs: Arc<Preferences>,
        tray: TrayHandle,
        interval: Duration,
    ) -> Self {
        Self {
            probe,
            tracker: StateTracker::new(),
            notifier,
            prefs,
            tray,
            interval,
        }
    }

    /// Runs cycles until the token is cancelled, then tells the shell to
    /// shut down.
    pub async fn run(mut self, cancel: CancellationToken) {
        loop {
            self.cycle().await;

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::info!("poll sequencer stopping");
        self.tray.shutdown().await;
    }

    /// One probe cycle.
    ///
    /// DNS strictly precedes HTTP, and each check's menu line is refreshed
    /// as soon as that check finishes. The transition decision comes after
    /// both checks.
    async fn cycle(&mut self) {
        let dns = self.probe.check_dns().await;
        self.tray.update_check(
            CheckTarget::Dns,
            dns.as_ref().map(|_| ()).map_err(|e| e.to_string()),
        );

        let http = self.probe.check_http().await;
        self.tray.update_check(
            CheckTarget::Http,
            http.as_ref().map(|_| ()).map_err(|e| e.to_string()),
        );

        if let Some(transition) = self.tracker.update(dns.is_ok(), http.is_ok()) {
            tracing::info!(?transition, "connectivity changed");
            self.notifier
                .dispatch(transition, &self.prefs, &self.tray)
                .await;
        }
    }
}
