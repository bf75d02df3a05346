//! Response DTOs for the news aggregator API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::db::{Bookmark, User};

/// Response body for user endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub firebase_uid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            firebase_uid: user.firebase_uid,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response body for bookmark endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkResponse {
    pub id: i64,
    pub user_id: i64,
    pub article_id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            user_id: bookmark.user_id,
            article_id: bookmark.article_id,
            title: bookmark.title,
            description: bookmark.description,
            url: bookmark.url,
            source: bookmark.source,
            published_at: bookmark.published_at,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

/// A news article as returned by the search and headline endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
}

/// Plain message body (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Counters for one expiring store, as exposed on GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StoreStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Configured limits of the rate limiter and response cache
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSettings {
    pub rate_limit_max_requests: u32,
    /// Window length in seconds
    pub rate_limit_time_window: u64,
    pub cache_max_size: usize,
    /// Cached response lifetime in seconds
    pub cache_ttl: u64,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub response_cache: StoreStatsResponse,
    pub rate_limiter: StoreStatsResponse,
    pub settings: PipelineSettings,
}
