//! Connectivity state tracking and shared user preferences.

mod prefs;
mod tracker;

pub use prefs::Preferences;
pub use tracker::{ConnectivityState, StateTracker, Transition};
