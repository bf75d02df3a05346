//! News Module
//!
//! Access to the third-party news provider behind the `NewsProvider` trait.

mod newsapi;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::AppError;
use crate::models::{HeadlinesParams, NewsArticle, NewsSearchParams};

pub use newsapi::NewsApiClient;

/// Failure talking to the news provider.
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("news provider API key is not configured")]
    MissingApiKey,

    #[error("request to news provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("news provider returned {code}: {message}")]
    Api { code: String, message: String },
}

impl From<NewsError> for AppError {
    fn from(err: NewsError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

// == News Provider ==
/// Source of news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync + 'static {
    /// Full-text article search.
    async fn search(&self, params: &NewsSearchParams) -> Result<Vec<NewsArticle>, NewsError>;

    /// Current top headlines.
    async fn headlines(&self, params: &HeadlinesParams) -> Result<Vec<NewsArticle>, NewsError>;
}
