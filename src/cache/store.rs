//! Cache Store Module
//!
//! Lock-guarded entry map shared between callers and the reaper.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

/// Map and counters guarded together by one lock.
#[derive(Debug, Default)]
struct StoreInner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Cache Store ==
/// Synchronous, thread-safe storage behind an [`ExpiringCache`].
///
/// Every operation takes the single store lock for one map operation (or one
/// full sweep for [`CacheStore::reap_expired`]) and never awaits or does I/O
/// while holding it.
///
/// [`ExpiringCache`]: crate::cache::ExpiringCache
#[derive(Debug)]
pub struct CacheStore {
    inner: Mutex<StoreInner>,
    retention: Duration,
    strict_expiry: bool,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `retention` - Age after which entries are removed by a reap pass
    /// * `strict_expiry` - Also hide entries older than `retention` on read
    pub fn new(retention: Duration, strict_expiry: bool) -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
            retention,
            strict_expiry,
        }
    }

    // Each critical section is a single map operation, so a panic elsewhere
    // cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamping the current time.
    pub fn put(&self, key: String, value: Vec<u8>) {
        let mut inner = self.lock();
        inner.entries.insert(key, CacheEntry::new(value));
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
    }

    // == Get ==
    /// Returns a copy of the stored value, or `None` on a miss.
    ///
    /// Without strict expiry a stale entry is still served until the reaper
    /// removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut inner = self.lock();

        let value = match inner.entries.get(key) {
            Some(entry) if self.strict_expiry && entry.is_older_than(self.retention) => None,
            Some(entry) => Some(entry.value().to_vec()),
            None => None,
        };

        if value.is_some() {
            inner.stats.record_hit();
        } else {
            inner.stats.record_miss();
        }
        value
    }

    // == Reap Expired ==
    /// Removes every entry older than the retention window.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&self) -> usize {
        let mut inner = self.lock();
        let retention = self.retention;

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_older_than(retention));
        let remaining = inner.entries.len();

        let removed = before - remaining;
        inner.stats.record_reaped(removed);
        inner.stats.set_total_entries(remaining);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }
}
