//! In-memory lookup cache with failed-attempt tracking.
//!
//! The cache maps an IP string to its last successful `LookupRecord` and keeps a
//! per-IP failed-attempt counter used by the orchestrator to throttle targets
//! that keep failing. All operations take a single `RwLock`, so reads proceed in
//! parallel and writers are exclusive.

mod sweeper;

pub use sweeper::spawn_sweeper;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::time::Instant;

use crate::geoip::LookupRecord;

/// One cache slot.
///
/// Success entries carry a record and an expiry. Counter-only entries, created
/// by a failed attempt for an unknown IP, carry neither and are treated as
/// already expired by the sweep.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Last successful result, if any
    pub record: Option<LookupRecord>,
    /// When `record` stops being served
    pub expiry: Option<Instant>,
    /// Failed attempts since the last successful `set`
    pub attempts: u32,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expiry.is_some_and(|expiry| now < expiry)
    }
}

/// Thread-safe TTL cache of lookup results.
#[derive(Debug, Default)]
pub struct LookupCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl LookupCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave an entry half-written, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the cached record if present and not yet expired.
    ///
    /// Expired entries are hidden but left in place for the sweeper.
    pub fn get(&self, key: &str) -> Option<LookupRecord> {
        let now = Instant::now();
        let entries = self.read();
        let entry = entries.get(key)?;
        if !entry.is_live(now) {
            return None;
        }
        entry.record.clone()
    }

    /// Stores `record` for `key`, expiring `ttl` from now.
    ///
    /// Replaces any previous entry, which also resets its attempt counter.
    pub fn set(&self, key: &str, record: LookupRecord, ttl: Duration) {
        let entry = CacheEntry {
            record: Some(record),
            expiry: Some(Instant::now() + ttl),
            attempts: 0,
        };
        self.write().insert(key.to_string(), entry);
    }

    /// Records one failed attempt for `key`.
    pub fn record_attempt(&self, key: &str) {
        let mut entries = self.write();
        entries
            .entry(key.to_string())
            .and_modify(|entry| entry.attempts = entry.attempts.saturating_add(1))
            .or_insert(CacheEntry {
                record: None,
                expiry: None,
                attempts: 1,
            });
    }

    /// Failed attempts recorded for `key` (0 if unknown).
    pub fn attempt_count(&self, key: &str) -> u32 {
        self.read().get(key).map(|entry| entry.attempts).unwrap_or(0)
    }

    /// Removes every entry that is no longer live and returns how many were dropped.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        before - entries.len()
    }

    /// Number of stored entries, live or not.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
