//! API Handlers
//!
//! HTTP request handlers over the shared TTL cache.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, PutResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the one cache built at startup; handlers never construct their own.
#[derive(Clone)]
pub struct AppState {
    pub cache: TtlCache,
}

impl AppState {
    pub fn new(cache: TtlCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails if the configured interval is not positive.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = TtlCache::new(config.cache_interval()?)?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /cache/:key
///
/// Stores the raw request body under `key`.
pub async fn put_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Json<PutResponse> {
    let size = body.len();
    state.cache.put(key.clone(), body).await;

    Json(PutResponse::new(key, size))
}

/// Handler for GET /cache/:key
///
/// Returns the stored bytes unchanged.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> std::result::Result<Response, ApiError> {
    match state.cache.get(&key).await {
        Some(value) => {
            Ok(([(header::CONTENT_TYPE, "application/octet-stream")], value).into_response())
        }
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;

    Json(StatsResponse::new(
        &stats,
        state.cache.interval().as_millis() as u64,
        state.cache.is_reaper_running(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
