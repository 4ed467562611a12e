//! Single-IP lookup with caching, throttling and retries.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio_retry::Retry;

use crate::cache::LookupCache;
use crate::config::LookupSettings;
use crate::error_handling::{linear_backoff, LookupError, ProcessingStats};
use crate::geoip::{LookupRecord, Resolver};

/// Drives lookups for one run.
///
/// Cheap to share: batch tasks hold it through an `Arc`.
pub struct Orchestrator {
    pub(super) cache: Arc<LookupCache>,
    resolver: Resolver,
    settings: LookupSettings,
    pub(super) stats: Arc<ProcessingStats>,
}

impl Orchestrator {
    /// Creates an orchestrator over an existing cache.
    ///
    /// A `max_retries` of zero is raised to one so every lookup gets at least
    /// one attempt.
    pub fn new(cache: Arc<LookupCache>, resolver: Resolver, settings: LookupSettings) -> Self {
        let settings = LookupSettings {
            max_retries: settings.max_retries.max(1),
            ..settings
        };
        Self {
            cache,
            resolver,
            settings,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// The cache shared with the sweeper.
    pub fn cache(&self) -> &Arc<LookupCache> {
        &self.cache
    }

    /// Failure counters accumulated by [`Orchestrator::lookup_batch`].
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Resolves one IP.
    ///
    /// Order of operations:
    /// 1. A live cache entry is returned without touching the network.
    /// 2. An IP with `max_retries` or more recorded failures is rejected with
    ///    [`LookupError::Throttled`].
    /// 3. Otherwise the resolver is tried up to `max_retries` times, sleeping
    ///    `retry_backoff * n` after the n-th failure (none after the last).
    ///    Every failure is recorded against the IP.
    /// 4. A success is cached for `cache_ttl`.
    ///
    /// The empty string looks up the caller's own public address.
    pub async fn lookup_ip(&self, ip: &str) -> Result<LookupRecord, LookupError> {
        if let Some(record) = self.cache.get(ip) {
            info!("Using cached result for {}", display_ip(ip));
            return Ok(record);
        }

        let attempts = self.cache.attempt_count(ip);
        if attempts >= self.settings.max_retries {
            warn!(
                "Skipping {}: {} failed attempts already recorded",
                display_ip(ip),
                attempts
            );
            return Err(LookupError::Throttled {
                ip: ip.to_string(),
                attempts,
            });
        }

        let strategy = linear_backoff(self.settings.retry_backoff, self.settings.max_retries);
        let mut attempt = 0u32;
        let record = Retry::start(strategy, || {
            attempt += 1;
            let n = attempt;
            async move {
                debug!("Attempt {} for {}", n, display_ip(ip));
                self.resolver.resolve(ip).await.map_err(|e| {
                    warn!("Attempt {} failed for {}: {}", n, display_ip(ip), e);
                    self.cache.record_attempt(ip);
                    e
                })
            }
        })
        .await?;

        self.cache.set(ip, record.clone(), self.settings.cache_ttl);
        Ok(record)
    }
}

/// Label used in log lines; the empty IP is a self lookup.
pub(super) fn display_ip(ip: &str) -> &str {
    if ip.is_empty() {
        "own address"
    } else {
        ip
    }
}
