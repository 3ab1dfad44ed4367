//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the life of a cache.
//!
//! # Tasks
//! - Reaper: Removes expired cache entries once per interval

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
