//! Network reachability probes for NetStatus.
//!
//! One probe cycle runs two checks: a DNS lookup of a fixed hostname and an
//! HTTP GET against a low-payload health-check endpoint. Each check carries
//! a hard timeout and returns pass/fail plus a displayable error for the
//! menu tooltip. The checks are side-effect-free with respect to process
//! state.

mod prober;

pub use prober::{
    DEFAULT_DNS_HOST, DEFAULT_HTTP_URL, DEFAULT_TIMEOUT, ProbeConfig, ProbeError, Prober,
    ReachabilityProbe,
};
