//! Run summary printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs a one-line summary of a batch, followed by per-category error counts
/// when anything failed.
pub fn print_run_summary(
    total: usize,
    successful: usize,
    failed: usize,
    elapsed_seconds: f64,
    error_stats: &ProcessingStats,
) {
    info!(
        "✅ Looked up {} IP{} ({} succeeded, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        successful,
        failed,
        elapsed_seconds
    );
    print_error_statistics(error_stats);
}

/// Prints non-zero error counters to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}
