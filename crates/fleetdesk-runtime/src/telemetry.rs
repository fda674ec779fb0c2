//! # Telemetry
//!
//! Structured logging setup for the data layer. The level filter comes from
//! `FLEETDESK_LOG` (standard `EnvFilter` syntax), defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; only the first call installs a subscriber
/// (later calls are no-ops, which keeps tests independent of ordering).
pub fn init() {
    let filter = EnvFilter::try_from_env("FLEETDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
