//! Headless stand-in for the platform tray shell.
//!
//! The real shell (`tray-icon`/`muda` on a main-thread event loop) is an
//! external collaborator. This drain applies core updates to the menu model
//! and logs the result, so the monitor runs unmodified on machines without
//! a tray. Icon bytes are resolved from the embedded asset table exactly as
//! a real shell would before handing them to the toolkit.

use netstatus_assets::Icon;
use netstatus_tray::{IconKind, MenuState, TrayConfig, TrayUpdate};
use tokio::sync::mpsc;

/// Maps a logical icon to its embedded PNG.
fn resolve_icon(kind: IconKind) -> Icon {
    match kind {
        IconKind::Idle => Icon::NetworkIdle,
        IconKind::Error => Icon::NetworkError,
        IconKind::LogOut => Icon::SystemLogOut,
    }
}

/// Applies updates until shutdown is requested or the core goes away.
pub async fn run(config: TrayConfig, mut updates: mpsc::Receiver<TrayUpdate>) {
    let mut state = MenuState::new(config);

    while let Some(update) = updates.recv().await {
        match &update {
            TrayUpdate::Shutdown => {
                tracing::info!("tray shell shutting down");
                break;
            }
            TrayUpdate::Icon(kind) => {
                let png = resolve_icon(*kind).bytes();
                tracing::info!(icon = ?kind, bytes = png.len(), "tray icon changed");
            }
            TrayUpdate::Check { target, status } => {
                tracing::debug!(
                    line = %status.line(*target),
                    tooltip = %status.tooltip(),
                    "menu line refreshed"
                );
            }
            TrayUpdate::SoundsEnabled(enabled) => {
                tracing::debug!(enabled, "sounds checkbox updated");
            }
            TrayUpdate::NotificationsEnabled(enabled) => {
                tracing::debug!(enabled, "notifications checkbox updated");
            }
        }

        state.apply(&update);
        // A real shell would rebuild the context menu here.
        let _ = state.build_menu();
    }
}
