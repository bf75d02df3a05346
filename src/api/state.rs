//! Application State
//!
//! Everything the handlers and middleware share, constructed once at startup.

use std::sync::Arc;

use crate::auth::{StaticTokenVerifier, TokenVerifier};
use crate::config::Config;
use crate::db::Database;
use crate::middleware::{RateLimiter, RequestPipeline, ResponseCache};
use crate::news::{NewsApiClient, NewsProvider};

/// Application state shared across all handlers.
///
/// Collaborators are held behind `Arc` handles so the router can be cloned
/// per connection without copying state.
#[derive(Clone)]
pub struct AppState {
    /// User and bookmark storage
    pub db: Arc<Database>,
    /// Bearer token verification
    pub verifier: Arc<dyn TokenVerifier>,
    /// Upstream news source
    pub news: Arc<dyn NewsProvider>,
    /// Rate limiter and response cache applied in front of the API
    pub pipeline: RequestPipeline,
    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Creates a new AppState from explicit collaborators.
    pub fn new(
        db: Arc<Database>,
        verifier: Arc<dyn TokenVerifier>,
        news: Arc<dyn NewsProvider>,
        pipeline: RequestPipeline,
    ) -> Self {
        Self {
            db,
            verifier,
            news,
            pipeline,
            cors_origins: vec!["*".to_string()],
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the limiter, response cache, in-memory database, static token
    /// verifier and NewsAPI client with parameters from the Config.
    pub fn from_config(config: &Config) -> Self {
        let pipeline = RequestPipeline::new(
            Arc::new(RateLimiter::new(
                config.rate_limit_max_requests,
                config.rate_limit_window(),
            )),
            Arc::new(ResponseCache::new(config.cache_max_size, config.cache_ttl())),
        );
        let verifier: StaticTokenVerifier = config.auth_tokens.iter().cloned().collect();
        let news = NewsApiClient::new(&config.news_api_base_url, &config.news_api_key);

        Self {
            cors_origins: config.cors_origins.clone(),
            ..Self::new(
                Arc::new(Database::new()),
                Arc::new(verifier),
                Arc::new(news),
                pipeline,
            )
        }
    }
}
