//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use super::bookmarks::{create_bookmark_handler, delete_bookmark_handler, list_bookmarks_handler};
use super::news::{headlines_handler, search_news_handler};
use super::system::{health_handler, root_handler, stats_handler};
use super::users::{me_handler, register_handler};
use super::AppState;
use crate::auth::require_user;
use crate::middleware::{cache_responses, rate_limit, rate_limit_and_cache};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Welcome message
/// - `POST /api/v1/register` - Register a user
/// - `GET /api/v1/me` - Current user
/// - `POST /api/v1/bookmarks` - Save an article
/// - `GET /api/v1/bookmarks` - List saved articles
/// - `DELETE /api/v1/bookmarks/:bookmark_id` - Remove a saved article
/// - `GET /api/v1/news/search` - Search articles
/// - `GET /api/v1/news/headlines` - Top headlines
/// - `GET /health` - Health check endpoint
/// - `GET /stats` - Cache and rate limiter statistics
///
/// # Middleware
/// - `/` and `/api/v1/register`: rate limiting, then response caching
/// - `/api/v1/me`, `/api/v1/bookmarks`: rate limiting only, responses are per user
/// - `/api/v1/news/*`: rate limiting, authentication, then response caching
/// - CORS: configured origins, any method and header
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);
    let pipeline = state.pipeline.clone();

    let public = Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/register", post(register_handler))
        .layer(from_fn_with_state(pipeline.clone(), rate_limit_and_cache));

    let per_user = Router::new()
        .route("/api/v1/me", get(me_handler))
        .route(
            "/api/v1/bookmarks",
            post(create_bookmark_handler).get(list_bookmarks_handler),
        )
        .route(
            "/api/v1/bookmarks/:bookmark_id",
            delete(delete_bookmark_handler),
        )
        .layer(from_fn_with_state(pipeline.clone(), rate_limit));

    // Layers run outermost first: limiter, then auth, then cache
    let news = Router::new()
        .route("/api/v1/news/search", get(search_news_handler))
        .route("/api/v1/news/headlines", get(headlines_handler))
        .layer(from_fn_with_state(pipeline.clone(), cache_responses))
        .layer(from_fn_with_state(state.clone(), require_user))
        .layer(from_fn_with_state(pipeline, rate_limit));

    Router::new()
        .merge(public)
        .merge(per_user)
        .merge(news)
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenVerifier;
    use crate::db::Database;
    use crate::middleware::{RateLimiter, RequestPipeline, ResponseCache};
    use crate::models::{HeadlinesParams, NewsArticle, NewsSearchParams};
    use crate::news::{NewsError, NewsProvider};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    struct NoNews;

    #[async_trait]
    impl NewsProvider for NoNews {
        async fn search(&self, _: &NewsSearchParams) -> Result<Vec<NewsArticle>, NewsError> {
            Ok(Vec::new())
        }

        async fn headlines(&self, _: &HeadlinesParams) -> Result<Vec<NewsArticle>, NewsError> {
            Err(NewsError::MissingApiKey)
        }
    }

    fn create_test_app() -> Router {
        let pipeline = RequestPipeline::new(
            Arc::new(RateLimiter::new(100, Duration::from_secs(60))),
            Arc::new(ResponseCache::new(100, Duration::from_secs(300))),
        );
        let state = AppState::new(
            Arc::new(Database::new()),
            Arc::new(StaticTokenVerifier::new().with_token("token-1", "uid-1")),
            Arc::new(NoNews),
            pipeline,
        );
        create_router(state)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let response = create_test_app().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = create_test_app().oneshot(get_request("/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_me_requires_credentials() {
        let response = create_test_app().oneshot(get_request("/api/v1/me")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/register")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"email":"a@example.com","firebase_uid":"uid-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let response = create_test_app()
            .oneshot(get_request("/api/v1/nothing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
