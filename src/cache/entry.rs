//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped at insertion.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached payload and the moment it was stored.
///
/// Entries are never mutated in place; a new `put` for the same key replaces
/// the whole entry, which also resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    value: Vec<u8>,
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// Returns the stored payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Older Than ==
    /// Checks whether the entry has outlived `retention`.
    ///
    /// Boundary condition: an entry whose age equals `retention` exactly is
    /// still live; it becomes reapable once its age is strictly greater.
    pub fn is_older_than(&self, retention: Duration) -> bool {
        self.age() > retention
    }
}
