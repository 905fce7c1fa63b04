//! Channel-based system tray interface for NetStatus.
//!
//! The actual tray rendering depends on platform toolkits (`tray-icon`,
//! `muda`) that require system libraries and a main-thread event loop. This
//! crate defines the menu model and the channel protocol the core uses to
//! talk to whichever shell renders it, independent of the GUI backend:
//! - [`TrayEvent`] — events from the shell to the core (toggles, quit)
//! - [`TrayUpdate`] — updates from the core to the shell (icon, menu lines)
//!
//! # Platform notes
//! - Linux: StatusNotifierItem (Wayland) or the X11 tray protocol
//! - Windows: Win32 Shell_NotifyIcon
//! - The shell event loop must run on the main thread on some platforms

mod handle;
mod menu;

pub use handle::{TrayEvent, TrayHandle, TrayUpdate};
pub use menu::{CheckStatus, CheckTarget, IconKind, MenuAction, MenuItem, MenuState, TrayConfig};
