// silica/src/utils/timeout.rs
//! Timeout helpers. Exchange timeouts are enforced by the transport; these
//! only centralize the default value and conversions.

use std::time::Duration;

/// Default exchange timeout in milliseconds, matching the CLI default of
/// 1.0 seconds.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default exchange timeout as Duration.
pub fn default_exchange_timeout() -> Duration {
    ms(DEFAULT_EXCHANGE_TIMEOUT_MS)
}
