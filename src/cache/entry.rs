//! Cache Entry Module
//!
//! Defines a single stored value tagged with its insertion instant.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored value and the instant it was inserted.
///
/// Entries are never mutated; a put on an existing key swaps in a new entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value, opaque to the cache
    pub value: Bytes,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion instant.
    pub fn with_created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `interval` as of `now`.
    ///
    /// Strictly greater: an entry whose age equals the interval survives.
    pub fn is_expired(&self, interval: Duration, now: Instant) -> bool {
        self.age(now) > interval
    }
}
