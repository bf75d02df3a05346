//! System Handlers
//!
//! Welcome message, health check and store statistics.

use axum::{extract::State, Json};

use super::AppState;
use crate::models::{HealthResponse, MessageResponse, PipelineSettings, StatsResponse};

/// Handler for GET /
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the News Aggregator API"))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /stats
///
/// Reports the response cache and rate limiter store counters, along with
/// their configured limits.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let pipeline = &state.pipeline;
    Json(StatsResponse {
        response_cache: pipeline.cache.stats().into(),
        rate_limiter: pipeline.limiter.stats().into(),
        settings: PipelineSettings {
            rate_limit_max_requests: pipeline.limiter.max_requests(),
            rate_limit_time_window: pipeline.limiter.time_window().as_secs(),
            cache_max_size: pipeline.cache.max_size(),
            cache_ttl: pipeline.cache.ttl().as_secs(),
        },
    })
}
