//! Embedded icons and sound clips.
//!
//! A process-wide immutable resource table: named byte buffers bundled at
//! build time and shared read-only across tasks. Rendering and playback
//! belong to the tray shell and audio backend respectively; this crate only
//! owns the bytes.

/// Tray and menu icons (PNG).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Shown while the connection is up.
    NetworkIdle,
    /// Shown while the connection is down.
    NetworkError,
    /// Decorates the quit menu item.
    SystemLogOut,
}

impl Icon {
    /// Raw PNG bytes for this icon.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::NetworkIdle => include_bytes!("../assets/icons/network-idle.png"),
            Self::NetworkError => include_bytes!("../assets/icons/network-error.png"),
            Self::SystemLogOut => include_bytes!("../assets/icons/system-log-out.png"),
        }
    }
}

/// Transition sound clips (WAV).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Played when the connection comes up.
    Online,
    /// Played when the connection goes down.
    Offline,
}

impl Sound {
    /// Raw WAV bytes for this clip.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::Online => include_bytes!("../assets/sounds/online.wav"),
            Self::Offline => include_bytes!("../assets/sounds/offline.wav"),
        }
    }
}
