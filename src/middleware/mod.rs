//! Middleware Module
//!
//! Rate limiting and response caching applied in front of the API routes.
//!
//! # Order
//! 1. Rate limiter (rejects with 429)
//! 2. Response cache (GET only)
//! 3. Wrapped handler

pub mod pipeline;
pub mod rate_limit;
pub mod response_cache;

pub use pipeline::{cache_responses, rate_limit, rate_limit_and_cache, RequestPipeline};
pub use rate_limit::RateLimiter;
pub use response_cache::ResponseCache;
