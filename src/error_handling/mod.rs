//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (lookup, initialization)
//! - Per-category failure statistics for a run
//! - The linear backoff schedule shared by both retry layers

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{linear_backoff, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, LookupError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_processing_stats_multiple_increments() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::Throttled);
        stats.increment_error(ErrorType::Throttled);
        stats.increment_error(ErrorType::RateLimited);
        assert_eq!(stats.get_error_count(ErrorType::Throttled), 2);
        assert_eq!(stats.get_error_count(ErrorType::RateLimited), 1);
        assert_eq!(stats.total_errors(), 3);
    }
}
