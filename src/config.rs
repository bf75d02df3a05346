//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requests allowed per client per window
    pub rate_limit_max_requests: u32,
    /// Rate limit window length in seconds
    pub rate_limit_time_window: u64,
    /// Maximum number of cached responses
    pub cache_max_size: usize,
    /// Cached response lifetime in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,
    /// NewsAPI.org key
    pub news_api_key: String,
    /// NewsAPI.org base URL
    pub news_api_base_url: String,
    /// Static bearer tokens, as `(token, firebase_uid)` pairs
    pub auth_tokens: Vec<(String, String)>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RATE_LIMIT_MAX_REQUESTS` - Requests per window per client (default: 100)
    /// - `RATE_LIMIT_TIME_WINDOW` - Window length in seconds (default: 60)
    /// - `CACHE_MAX_SIZE` - Maximum cached responses (default: 1000)
    /// - `CACHE_TTL` - Cached response lifetime in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `BACKEND_CORS_ORIGINS` - Comma separated origins (default: `*`)
    /// - `NEWS_API_KEY` - NewsAPI.org key (default: empty)
    /// - `NEWS_API_BASE_URL` - NewsAPI.org base URL (default: `https://newsapi.org`)
    /// - `AUTH_TOKENS` - `token:uid` pairs, comma separated (default: empty)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rate_limit_max_requests: parse_var::<u32>("RATE_LIMIT_MAX_REQUESTS")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.rate_limit_max_requests),
            rate_limit_time_window: parse_var::<u64>("RATE_LIMIT_TIME_WINDOW")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.rate_limit_time_window),
            cache_max_size: parse_var("CACHE_MAX_SIZE").unwrap_or(defaults.cache_max_size),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cors_origins: env::var("BACKEND_CORS_ORIGINS")
                .ok()
                .map(|v| split_list(&v))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.cors_origins),
            news_api_key: env::var("NEWS_API_KEY").unwrap_or(defaults.news_api_key),
            news_api_base_url: env::var("NEWS_API_BASE_URL")
                .unwrap_or(defaults.news_api_base_url),
            auth_tokens: env::var("AUTH_TOKENS")
                .map(|v| parse_auth_tokens(&v))
                .unwrap_or(defaults.auth_tokens),
        }
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_time_window)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: 100,
            rate_limit_time_window: 60,
            cache_max_size: 1000,
            cache_ttl: 300,
            server_port: 8000,
            cors_origins: vec!["*".to_string()],
            news_api_key: String::new(),
            news_api_base_url: "https://newsapi.org".to_string(),
            auth_tokens: Vec::new(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `token:uid,token2:uid2`, skipping malformed pairs.
fn parse_auth_tokens(raw: &str) -> Vec<(String, String)> {
    split_list(raw)
        .into_iter()
        .filter_map(|pair| {
            let (token, uid) = pair.split_once(':')?;
            let (token, uid) = (token.trim(), uid.trim());
            if token.is_empty() || uid.is_empty() {
                return None;
            }
            Some((token.to_string(), uid.to_string()))
        })
        .collect()
}
