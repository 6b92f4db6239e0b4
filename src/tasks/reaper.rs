//! Reaper Task
//!
//! Background task that periodically removes entries older than the cache's
//! retention window.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reaper for `store` on the given runtime.
///
/// The task sleeps for `reap_interval`, sweeps the store, and repeats. It
/// stops as soon as a shutdown signal arrives or the sending half of the
/// channel is dropped, whichever comes first.
///
/// # Arguments
/// * `runtime` - Runtime the task is spawned on
/// * `store` - Shared store to sweep
/// * `reap_interval` - Pause between two sweeps
/// * `shutdown_rx` - Receiver for the owner's shutdown broadcast
///
/// # Example
/// ```ignore
/// let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
/// let handle = spawn_reaper_task(&Handle::current(), store, interval, shutdown_rx);
/// // Later, during shutdown:
/// shutdown_tx.send(()).ok();
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    runtime: &Handle,
    store: Arc<CacheStore>,
    reap_interval: Duration,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        debug!(
            interval_ms = reap_interval.as_millis() as u64,
            retention_ms = store.retention().as_millis() as u64,
            "Cache reaper started"
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(reap_interval) => {
                    let removed = store.reap_expired();

                    if removed > 0 {
                        info!(removed, remaining = store.len(), "Cache reap pass removed stale entries");
                    } else {
                        debug!("Cache reap pass: nothing to remove");
                    }
                }

                // Err(Closed) means the owning cache is gone
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }

        debug!("Cache reaper stopped");
    })
}
