//! Cache Module
//!
//! Provides an in-memory key/value cache whose entries expire after a fixed
//! retention window.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::{CacheConfig, ExpiringCache};
pub use stats::CacheStats;
pub use store::CacheStore;
