//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - Provider HTTP client
//! - Lookup cache and its background sweeper
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::cache::{spawn_sweeper, LookupCache};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the shared lookup cache and starts its sweeper.
///
/// Returns the cache together with the token that stops the sweeper; cancel it
/// at shutdown.
pub fn init_cache(sweep_interval: Duration) -> (Arc<LookupCache>, CancellationToken) {
    let cache = Arc::new(LookupCache::new());
    let shutdown = spawn_sweeper(Arc::clone(&cache), sweep_interval);
    (cache, shutdown)
}
