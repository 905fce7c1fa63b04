//! Up/down state tracking across probe cycles.

/// Overall connectivity: the conjunction of the DNS and HTTP checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityState {
    Up,
    #[default]
    Down,
}

impl ConnectivityState {
    /// Returns `true` for [`ConnectivityState::Up`].
    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }

    /// Combines the two check outcomes of one cycle.
    pub fn from_checks(dns_ok: bool, http_ok: bool) -> Self {
        if dns_ok && http_ok { Self::Up } else { Self::Down }
    }
}

/// A change in connectivity between consecutive cycles — the sole trigger
/// for notifications and sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CameUp,
    WentDown,
}

/// Compares each cycle's outcome against the last known state.
///
/// The baseline starts at [`ConnectivityState::Down`], so the first all-green
/// cycle reports [`Transition::CameUp`].
#[derive(Debug, Default)]
pub struct StateTracker {
    last: ConnectivityState,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one cycle's check results into the tracker.
    ///
    /// Returns a transition only when the state changed. The baseline is
    /// updated unconditionally, so a flap across consecutive cycles is
    /// compared against the latest state rather than a stale one.
    pub fn update(&mut self, dns_ok: bool, http_ok: bool) -> Option<Transition> {
        let new = ConnectivityState::from_checks(dns_ok, http_ok);
        let transition = if new != self.last {
            Some(if new.is_up() {
                Transition::CameUp
            } else {
                Transition::WentDown
            })
        } else {
            None
        };
        self.last = new;
        transition
    }

    /// Last known connectivity state.
    pub fn state(&self) -> ConnectivityState {
        self.last
    }
}
