//! Cache Module
//!
//! In-memory byte cache with interval-based expiry and a background reaper.

mod entry;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl::TtlCache;
