//! TTL Cache - An in-memory byte cache with interval-based expiry
//!
//! Entries older than the configured interval are swept by a background
//! reaper. A thin HTTP front door exposes one shared cache over the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::Config;
pub use error::CacheError;
