//! Concurrent fan-out across a batch of IPs.

use std::sync::Arc;

use log::{error, warn};
use tokio::task::JoinSet;

use crate::error_handling::{update_error_stats, ErrorType};
use crate::geoip::LookupRecord;

use super::orchestrator::{display_ip, Orchestrator};

impl Orchestrator {
    /// Looks up every IP concurrently, one task per IP.
    ///
    /// The result has the same length and order as `ips`. A failed lookup is
    /// logged, counted in [`Orchestrator::stats`], and leaves its slot `None`
    /// without affecting the others. Returns once every task has finished.
    pub async fn lookup_batch(self: &Arc<Self>, ips: &[String]) -> Vec<Option<LookupRecord>> {
        let mut slots: Vec<Option<LookupRecord>> = vec![None; ips.len()];
        let mut tasks = JoinSet::new();

        for (index, ip) in ips.iter().enumerate() {
            let orchestrator = Arc::clone(self);
            let ip = ip.clone();
            tasks.spawn(async move {
                let result = orchestrator.lookup_ip(&ip).await;
                (index, ip, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(record))) => slots[index] = Some(record),
                Ok((_, ip, Err(e))) => {
                    warn!("Failed to fetch info for {}: {}", display_ip(&ip), e);
                    update_error_stats(&self.stats, &e);
                }
                Err(join_error) => {
                    // The slot of a panicked task stays empty
                    error!("Lookup task failed: {}", join_error);
                    self.stats.increment_error(ErrorType::TaskFailure);
                }
            }
        }

        slots
    }
}
