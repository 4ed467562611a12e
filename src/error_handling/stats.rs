//! Processing statistics tracking.
//!
//! Thread-safe per-category failure counters for a lookup run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe processing statistics tracker.
///
/// Every `ErrorType` is initialized to zero on creation, so the counters can be
/// shared across lookup tasks behind an `Arc` without further locking.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ProcessingStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
