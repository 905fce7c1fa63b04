//! Control loop for NetStatus: the poll and event sequencers.
//!
//! Two background tasks cooperate over channels and one cancellation token:
//! the poll sequencer runs probe cycles on a fixed interval, the event
//! sequencer consumes tray toggles and the quit action.

mod events;
mod poller;

pub use events::event_loop;
pub use poller::{DEFAULT_POLL_INTERVAL, Poller};
