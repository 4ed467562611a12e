//! Background sweeper for the lookup cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::LookupCache;

/// Spawns a task that calls [`LookupCache::sweep`] every `period`.
///
/// Returns the token that stops the task. Must be called from within a Tokio
/// runtime.
pub fn spawn_sweeper(cache: Arc<LookupCache>, period: Duration) -> CancellationToken {
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();

    // interval() panics on a zero period
    let period = period.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; nothing to sweep at startup
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    log::debug!("Cache sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = cache.sweep();
                    if removed > 0 {
                        log::debug!("Cache sweep removed {} expired entries", removed);
                    }
                }
            }
        }
    });

    shutdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geoip::LookupRecord;

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_reclaims_expired_entries() {
        let cache = Arc::new(LookupCache::new());
        cache.set("1.1.1.1", LookupRecord::default(), Duration::from_secs(5));
        cache.record_attempt("9.9.9.9");

        let shutdown = spawn_sweeper(Arc::clone(&cache), Duration::from_secs(60));
        assert_eq!(cache.len(), 2);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(cache.is_empty());

        shutdown.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_keeps_live_entries() {
        let cache = Arc::new(LookupCache::new());
        cache.set("1.1.1.1", LookupRecord::default(), Duration::from_secs(3600));

        let shutdown = spawn_sweeper(Arc::clone(&cache), Duration::from_secs(60));
        tokio::time::sleep(Duration::from_secs(121)).await;
        assert_eq!(cache.len(), 1);
        assert!(cache.get("1.1.1.1").is_some());

        shutdown.cancel();
    }
}
