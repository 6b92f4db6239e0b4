//! Expiring Cache Module
//!
//! Public cache handle: owns the shared store and the reaper task sweeping it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

// == Cache Config ==
/// Construction parameters for an [`ExpiringCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Age after which an entry is removed by the reaper
    pub retention: Duration,
    /// Pause between two reap passes
    pub reap_interval: Duration,
    /// Hide entries older than `retention` on read, before the reaper runs
    pub strict_expiry: bool,
}

impl CacheConfig {
    /// Reaps every `retention`, serving stale entries until then.
    pub fn new(retention: Duration) -> Self {
        Self {
            retention,
            reap_interval: retention,
            strict_expiry: false,
        }
    }

    pub fn with_reap_interval(mut self, reap_interval: Duration) -> Self {
        self.reap_interval = reap_interval;
        self
    }

    pub fn with_strict_expiry(mut self, strict_expiry: bool) -> Self {
        self.strict_expiry = strict_expiry;
        self
    }

    /// Rejects durations that would make the reaper spin or never expire.
    pub fn validate(&self) -> Result<()> {
        if self.retention.is_zero() {
            return Err(CacheError::InvalidConfig(
                "retention must be greater than zero".to_string(),
            ));
        }
        if self.reap_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "reap interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// == Expiring Cache ==
/// Thread-safe key/value cache whose entries are purged by a background
/// reaper once they outlive the retention window.
///
/// `put` and `get` are synchronous and may be called from any thread or task.
/// The reaper runs on the Tokio runtime that was current at construction and
/// stops on [`ExpiringCache::shutdown`] or when the cache is dropped.
///
/// # Example
/// ```ignore
/// let cache = ExpiringCache::new(Duration::from_secs(5))?;
/// cache.put(url.clone(), body);
/// if let Some(body) = cache.get(&url) { /* hit */ }
/// cache.shutdown().await;
/// ```
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<CacheStore>,
    reap_interval: Duration,
    shutdown_tx: broadcast::Sender<()>,
    reaper: Mutex<Option<JoinHandle<()>>>,
    /// Flips to true once the reaper has been joined
    stopped_tx: watch::Sender<bool>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache whose reaper runs every `retention`.
    ///
    /// # Errors
    /// * [`CacheError::InvalidConfig`] if `retention` is zero
    /// * [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(retention: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::new(retention))
    }

    /// Creates an empty cache from explicit parameters.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(CacheStore::new(config.retention, config.strict_expiry));
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let reaper = spawn_reaper_task(
            &runtime,
            Arc::clone(&store),
            config.reap_interval,
            shutdown_rx,
        );

        info!(
            retention_ms = config.retention.as_millis() as u64,
            reap_interval_ms = config.reap_interval.as_millis() as u64,
            strict_expiry = config.strict_expiry,
            "Expiring cache created"
        );

        Ok(Self {
            store,
            reap_interval: config.reap_interval,
            shutdown_tx,
            reaper: Mutex::new(Some(reaper)),
            stopped_tx: watch::Sender::new(false),
        })
    }

    // == Put ==
    /// Inserts or replaces the value for `key`, restarting its age.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.store.put(key.into(), value.into());
    }

    // == Get ==
    /// Returns the cached value for `key`, or `None` if it was never stored
    /// or has already been reaped.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key)
    }

    // == Reap Expired ==
    /// Runs one reap pass immediately and returns how many entries it removed.
    pub fn reap_expired(&self) -> usize {
        self.store.reap_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn retention(&self) -> Duration {
        self.store.retention()
    }

    pub fn reap_interval(&self) -> Duration {
        self.reap_interval
    }

    /// Returns true while the reaper task is still running.
    pub fn is_reaping(&self) -> bool {
        self.reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Every caller, including concurrent ones, returns only after the reaper
    /// has stopped; later calls return immediately. The cache stays usable
    /// for `put`/`get` afterwards, but nothing expires any more.
    pub async fn shutdown(&self) {
        let reaper = self
            .reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(reaper) = reaper else {
            // Another caller owns the join; wait for it to report completion
            let mut stopped = self.stopped_tx.subscribe();
            let _ = stopped.wait_for(|stopped| *stopped).await;
            return;
        };

        // Err only if the reaper already exited
        let _ = self.shutdown_tx.send(());

        if let Err(e) = reaper.await {
            warn!(error = %e, "Cache reaper did not stop cleanly");
        } else {
            info!("Cache reaper shut down");
        }
        self.stopped_tx.send_replace(true);
    }
}
