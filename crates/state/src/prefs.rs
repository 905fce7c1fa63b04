//! Shared user preference flags.

use std::sync::atomic::{AtomicBool, Ordering};

/// Sound and notification toggles.
///
/// Written by the event sequencer, read by the poll sequencer at every
/// transition dispatch — atomics instead of plain booleans keep the two
/// tasks race-free.
#[derive(Debug)]
pub struct Preferences {
    sounds: AtomicBool,
    notifications: AtomicBool,
}

impl Preferences {
    pub fn new(sounds: bool, notifications: bool) -> Self {
        Self {
            sounds: AtomicBool::new(sounds),
            notifications: AtomicBool::new(notifications),
        }
    }

    pub fn sounds_enabled(&self) -> bool {
        self.sounds.load(Ordering::SeqCst)
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications.load(Ordering::SeqCst)
    }

    /// Flips the sounds flag, returning the new value.
    pub fn toggle_sounds(&self) -> bool {
        !self.sounds.fetch_xor(true, Ordering::SeqCst)
    }

    /// Flips the notifications flag, returning the new value.
    pub fn toggle_notifications(&self) -> bool {
        !self.notifications.fetch_xor(true, Ordering::SeqCst)
    }
}

impl Default for Preferences {
    /// Both cues enabled, matching the initial checkbox states.
    fn default() -> Self {
        Self::new(true, true)
    }
}
