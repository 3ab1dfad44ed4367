//! Reaper Task
//!
//! Background task that sweeps expired entries out of the store once per
//! interval for as long as the cache lives.

use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Owns the stop signal and join handle of a running reaper.
///
/// Dropping the handle closes the stop channel, which the task treats the
/// same as an explicit shutdown.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    // == Shutdown ==
    /// Signals the reaper to stop. Calling this more than once is harmless.
    pub fn shutdown(&self) {
        if !self.shutdown_tx.send_replace(true) {
            debug!("Reaper shutdown requested");
        }
    }

    // == Is Running ==
    /// Returns true until the reaper task has exited.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

/// Spawns the reaper on `runtime`.
///
/// The task only holds a weak reference to the store, so it never keeps the
/// cache alive. It exits when:
/// - [`ReaperHandle::shutdown`] is called,
/// - the [`ReaperHandle`] is dropped,
/// - the store itself has been dropped.
///
/// The first sweep runs one full `interval` after spawning.
pub fn spawn_reaper(
    runtime: &Handle,
    store: Weak<Mutex<CacheStore>>,
    interval: Duration,
) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = runtime.spawn(async move {
        info!(
            "Starting reaper with interval of {} ms",
            interval.as_millis()
        );

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                // Ok means an explicit stop, Err means every sender is gone.
                _ = shutdown_rx.changed() => break,
                _ = ticker.tick() => {}
            }

            let Some(shared) = store.upgrade() else {
                break;
            };

            let removed = {
                let mut guard = shared.lock().await;
                guard.sweep_expired(Instant::now())
            };

            if removed > 0 {
                info!("Reaper sweep: removed {} expired entries", removed);
            } else {
                debug!("Reaper sweep: no expired entries found");
            }
        }

        info!("Reaper stopped");
    });

    ReaperHandle { shutdown_tx, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use bytes::Bytes;

    const INTERVAL: Duration = Duration::from_millis(50);

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new(INTERVAL)))
    }

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let store = shared_store();
        store
            .lock()
            .await
            .put("expire_soon".to_string(), Bytes::from_static(b"value"));

        let reaper = spawn_reaper(&Handle::current(), Arc::downgrade(&store), INTERVAL);

        // Two full periods plus slack
        time::sleep(INTERVAL * 3).await;

        assert!(store.lock().await.is_empty(), "Expired entry should have been reaped");
        reaper.shutdown();
    }

    #[tokio::test]
    async fn test_reaper_keeps_sweeping_after_first_period() {
        let store = shared_store();
        let reaper = spawn_reaper(&Handle::current(), Arc::downgrade(&store), INTERVAL);

        // Insert only after several periods have already passed
        time::sleep(INTERVAL * 4).await;
        store
            .lock()
            .await
            .put("late".to_string(), Bytes::from_static(b"value"));

        time::sleep(INTERVAL * 3).await;

        assert!(store.lock().await.is_empty(), "Late entry should still be reaped");
        assert!(reaper.is_running());
        reaper.shutdown();
    }

    #[tokio::test]
    async fn test_reaper_stops_on_shutdown() {
        let store = shared_store();
        let reaper = spawn_reaper(&Handle::current(), Arc::downgrade(&store), INTERVAL);

        reaper.shutdown();
        reaper.shutdown();
        time::sleep(Duration::from_millis(20)).await;

        assert!(!reaper.is_running(), "Reaper should finish after shutdown");

        store
            .lock()
            .await
            .put("kept".to_string(), Bytes::from_static(b"value"));
        time::sleep(INTERVAL * 3).await;

        assert_eq!(store.lock().await.len(), 1, "No sweeps after shutdown");
    }

    #[tokio::test]
    async fn test_reaper_stops_when_handle_dropped() {
        let store = shared_store();
        let reaper = spawn_reaper(&Handle::current(), Arc::downgrade(&store), INTERVAL);

        drop(reaper);
        store
            .lock()
            .await
            .put("k".to_string(), Bytes::from_static(b"value"));
        time::sleep(INTERVAL * 4).await;

        assert_eq!(
            store.lock().await.len(),
            1,
            "No sweeps once every handle is gone"
        );
    }

    #[tokio::test]
    async fn test_reaper_stops_when_store_dropped() {
        let store = shared_store();
        let reaper = spawn_reaper(&Handle::current(), Arc::downgrade(&store), INTERVAL);

        drop(store);
        time::sleep(INTERVAL * 3).await;

        assert!(!reaper.is_running(), "Reaper should exit once the store is gone");
    }
}
