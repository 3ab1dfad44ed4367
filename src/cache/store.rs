//! Cache Store Module
//!
//! The plain map behind the concurrent handle. Callers serialize access to it
//! through a single lock; nothing here is synchronized on its own.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with interval-based expiry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Activity counters
    stats: CacheStats,
    /// Age past which an entry is swept
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamped with the current instant.
    pub fn put(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the value for `key` if it is still in the map.
    ///
    /// Stale entries the reaper has not reached yet are still returned; the
    /// map alone decides presence.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every entry older than the interval as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(interval, now));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Interval ==
    /// Returns the age past which entries are swept.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(INTERVAL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.interval(), INTERVAL);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key1".to_string(), Bytes::from_static(b"value1"));
        let value = store.get("key1").unwrap();

        assert_eq!(value, Bytes::from_static(b"value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(INTERVAL);
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key1".to_string(), Bytes::from_static(b"value1"));
        store.put("key1".to_string(), Bytes::from_static(b"value2"));

        assert_eq!(store.get("key1").unwrap(), Bytes::from_static(b"value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_binary_values_are_opaque() {
        let mut store = CacheStore::new(INTERVAL);
        let raw = Bytes::from(vec![0u8, 159, 146, 150, 255]);

        store.put("bin".to_string(), raw.clone());
        assert_eq!(store.get("bin").unwrap(), raw);
    }

    #[test]
    fn test_store_sweep_removes_only_stale_entries() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key1".to_string(), Bytes::from_static(b"value1"));
        let now = Instant::now();

        assert_eq!(store.sweep_expired(now), 0);
        assert_eq!(store.len(), 1);

        let removed = store.sweep_expired(now + INTERVAL * 2);
        assert_eq!(removed, 1);
        assert!(store.is_empty());
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_sweep_judges_replacement_by_its_own_age() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key".to_string(), Bytes::from_static(b"old"));
        std::thread::sleep(Duration::from_millis(80));
        store.put("key".to_string(), Bytes::from_static(b"new"));

        // Past the first insert's deadline, well within the second's.
        let removed = store.sweep_expired(Instant::now() + Duration::from_millis(50));

        assert_eq!(removed, 0);
        assert_eq!(store.get("key").unwrap(), Bytes::from_static(b"new"));
    }

    #[test]
    fn test_store_get_returns_stale_until_swept() {
        let mut store = CacheStore::new(Duration::from_millis(1));

        store.put("key1".to_string(), Bytes::from_static(b"value1"));
        std::thread::sleep(Duration::from_millis(5));

        assert!(store.get("key1").is_some());
        store.sweep_expired(Instant::now());
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(INTERVAL);

        store.put("key1".to_string(), Bytes::from_static(b"value1"));
        store.put("key2".to_string(), Bytes::from_static(b"value2"));
        store.get("key1").unwrap(); // hit
        let _ = store.get("nonexistent"); // miss
        store.sweep_expired(Instant::now() + INTERVAL * 2);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expired, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
