//! Error categorization and retry strategy.
//!
//! This module maps lookup errors onto `ErrorType` counters and builds the
//! linear backoff schedules used by both retry layers.

use std::time::Duration;

use super::stats::ProcessingStats;
use super::types::{ErrorType, LookupError};

/// Creates a linear backoff retry strategy.
///
/// Yields the delays slept *between* `attempts` tries: `base * 1`, `base * 2`,
/// ..., `base * (attempts - 1)`. There is no delay after the final attempt, so
/// the iterator is one shorter than the attempt budget. This matches how
/// `tokio_retry::Retry` consumes a strategy: one initial try, then one retry
/// per yielded delay.
///
/// # Examples
///
/// With the defaults (3s, 3 attempts) the schedule is `[3s, 6s]`.
pub fn linear_backoff(base: Duration, attempts: u32) -> impl Iterator<Item = Duration> {
    (1..attempts).map(move |n| base.saturating_mul(n))
}

/// Categorizes a `LookupError` into an `ErrorType`.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::InvalidInput(_) => ErrorType::InvalidInput,
        LookupError::Throttled { .. } => ErrorType::Throttled,
        LookupError::RateLimited { .. } => ErrorType::RateLimited,
        LookupError::Transport(_) => ErrorType::TransportError,
        LookupError::Parse(_) => ErrorType::ParseError,
    }
}

/// Updates processing statistics based on a `LookupError`.
pub fn update_error_stats(stats: &ProcessingStats, error: &LookupError) {
    stats.increment_error(categorize_lookup_error(error));
}
