//! Response models for the HTTP front door
//!
//! Cached payloads travel as raw bytes; only acknowledgements, stats and
//! health reports are JSON.

pub mod responses;

pub use responses::{ErrorResponse, HealthResponse, PutResponse, StatsResponse};
