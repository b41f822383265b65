//! Exponential backoff.

use std::time::Duration;

use super::config::BackoffConfig;

/// Delay before retry number `retry` (1-based) under `config`.
///
/// `initial * multiplier^(retry - 1)`, capped at `max_backoff`.
pub fn backoff_for(retry: u32, config: &BackoffConfig) -> Duration {
    let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
    let scaled = config.initial_backoff_ms as f64 * config.multiplier.powi(exponent);
    let capped = scaled.min(config.max_backoff_ms as f64);
    Duration::from_millis(capped as u64)
}
