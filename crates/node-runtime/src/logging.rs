//! # Logging Bootstrap
//!
//! Initializes the global tracing subscriber for the node binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// The filter comes from `EVENT_NODE_LOG`, then `RUST_LOG`, falling back
/// to `info`. Calling this twice is a no-op (the second install fails
/// quietly), which keeps it safe in tests.
pub fn init() {
    let filter = EnvFilter::try_from_env("EVENT_NODE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
