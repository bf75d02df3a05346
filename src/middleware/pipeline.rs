//! Request Pipeline
//!
//! Axum middleware that applies rate limiting, then response caching, around
//! the wrapped routes.
//!
//! `rate_limit_and_cache` runs both steps. `rate_limit` and `cache_responses`
//! run one step each so other middleware can sit between them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes, HttpBody},
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error, warn};

use super::rate_limit::RateLimiter;
use super::response_cache::{cache_key, ResponseCache, MAX_CACHED_BODY_BYTES};

/// Client identifier used when the peer address is not available.
pub const UNKNOWN_CLIENT: &str = "unknown";

// == Request Pipeline ==
/// Handles to the limiter and cache consulted for every request.
///
/// Both are constructed by whoever builds the router and shared by handle.
#[derive(Debug, Clone)]
pub struct RequestPipeline {
    pub limiter: Arc<RateLimiter>,
    pub cache: Arc<ResponseCache>,
}

impl RequestPipeline {
    pub fn new(limiter: Arc<RateLimiter>, cache: Arc<ResponseCache>) -> Self {
        Self { limiter, cache }
    }

    /// Counts the request against its client, returning the 429 response on rejection.
    fn admit(&self, req: &Request) -> Option<Response> {
        let client_id = client_identifier(req);
        if self.limiter.check(&client_id) {
            return None;
        }
        warn!(client = %client_id, path = %req.uri().path(), "Rate limit exceeded");
        Some(rate_limited_response())
    }

    async fn serve_cached(&self, req: Request, next: Next) -> Response {
        if req.method() != Method::GET {
            return next.run(req).await;
        }

        let key = cache_key(req.uri());
        if let Some(body) = self.cache.lookup(&key) {
            debug!(key = %key, "Serving response from cache");
            return cached_response(body);
        }

        let response = next.run(req).await;
        if response.status() != StatusCode::OK {
            return response;
        }

        capture_and_store(&self.cache, key, response).await
    }
}

// == Middleware ==
/// Rate limits by client, then serves GETs from cache or caches their 200 bodies.
///
/// Use with `axum::middleware::from_fn_with_state`.
///
/// A rejected request never reaches the cache. A cancelled handler stores
/// nothing and its request still counts against the client's quota.
pub async fn rate_limit_and_cache(
    State(pipeline): State<RequestPipeline>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(rejected) = pipeline.admit(&req) {
        return rejected;
    }
    pipeline.serve_cached(req, next).await
}

/// Rate limits by client without touching the response cache.
///
/// For routes whose responses depend on the caller.
pub async fn rate_limit(
    State(pipeline): State<RequestPipeline>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(rejected) = pipeline.admit(&req) {
        return rejected;
    }
    next.run(req).await
}

/// Response caching step on its own; expects `rate_limit` further out.
pub async fn cache_responses(
    State(pipeline): State<RequestPipeline>,
    req: Request,
    next: Next,
) -> Response {
    pipeline.serve_cached(req, next).await
}

/// Identifies the client by peer IP address.
pub fn client_identifier(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Stores the body of a 200 response if it is complete and small enough.
///
/// Bodies without an exact length (streams) pass through uncached. A body
/// that fails while being read is already consumed, so the client gets a
/// bare 500 and nothing is cached.
async fn capture_and_store(cache: &ResponseCache, key: String, response: Response) -> Response {
    match response.body().size_hint().exact() {
        Some(len) if len as usize <= MAX_CACHED_BODY_BYTES => {}
        _ => {
            debug!(key = %key, "Response body not capturable, skipping cache");
            return response;
        }
    }

    let (parts, body) = response.into_parts();
    match to_bytes(body, MAX_CACHED_BODY_BYTES).await {
        Ok(bytes) => {
            cache.store(key, bytes.clone());
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            error!(key = %key, error = %err, "Failed to read response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn rate_limited_response() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "detail": "Rate limit exceeded" })),
    )
        .into_response()
}

fn cached_response(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
