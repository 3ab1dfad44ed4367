//! TTL Cache Handle
//!
//! The concurrent, cloneable front of the cache. Every clone shares one store
//! and one reaper; the reaper stops on [`TtlCache::shutdown`] or when the last
//! clone is dropped.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == TTL Cache ==
/// In-memory byte cache whose entries are swept once they outlive `interval`.
///
/// Cloning is cheap and yields another handle to the same cache. Build one
/// per process or session and pass it around; a fresh cache per call never
/// holds anything.
///
/// ```ignore
/// let cache = TtlCache::new(Duration::from_secs(5))?;
/// cache.put(url.clone(), body).await;
/// if let Some(bytes) = cache.get(&url).await {
///     // served from cache
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TtlCache {
    /// Shared map, guarded by a single lock
    store: Arc<Mutex<CacheStore>>,
    /// Background sweeper, shared by all clones
    reaper: Arc<ReaperHandle>,
    interval: Duration,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// # Errors
    /// [`CacheError::InvalidConfiguration`] if `interval` is zero, too large
    /// to schedule a sweep for, or if no Tokio runtime is available to host
    /// the reaper.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "interval must be a positive duration".to_string(),
            ));
        }

        if Instant::now().checked_add(interval).is_none() {
            return Err(CacheError::InvalidConfiguration(format!(
                "interval of {:?} is too large to schedule",
                interval
            )));
        }

        let runtime = Handle::try_current().map_err(|e| {
            CacheError::InvalidConfiguration(format!(
                "cache must be created inside a Tokio runtime: {}",
                e
            ))
        })?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let reaper = spawn_reaper(&runtime, Arc::downgrade(&store), interval);

        Ok(Self {
            store,
            reaper: Arc::new(reaper),
            interval,
        })
    }

    // == Put ==
    /// Inserts or replaces the value stored under `key`.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache put");

        self.store.lock().await.put(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if it was never stored
    /// or has already been reaped.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.lock().await.get(key);
        debug!(key = %key, hit = value.is_some(), "cache get");
        value
    }

    // == Length ==
    /// Number of entries currently held, including stale ones not yet swept.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Interval ==
    /// Returns the entry lifetime, which is also the sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Shutdown ==
    /// Stops the reaper for every clone of this cache.
    ///
    /// Stored entries stay readable and writable, but nothing is swept anymore.
    pub fn shutdown(&self) {
        self.reaper.shutdown();
    }

    // == Reaper Running ==
    /// Returns true while the background reaper is still sweeping.
    pub fn is_reaper_running(&self) -> bool {
        self.reaper.is_running()
    }
}
