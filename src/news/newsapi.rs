//! NewsAPI.org client
//!
//! Calls `/v2/everything` and `/v2/top-headlines` and maps the provider's
//! article shape onto `NewsArticle`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, error};

use super::{NewsError, NewsProvider};
use crate::models::{HeadlinesParams, NewsArticle, NewsSearchParams};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// == NewsAPI Client ==
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("news_aggregator/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn fetch(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        category: Option<&str>,
    ) -> Result<Vec<NewsArticle>, NewsError> {
        if self.api_key.is_empty() {
            return Err(NewsError::MissingApiKey);
        }

        let url = format!("{}/v2/{}", self.base_url, endpoint);
        debug!(url = %url, "Querying news provider");

        let body: ApiResponse = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await?
            .json()
            .await?;

        if body.status != "ok" {
            let err = NewsError::Api {
                code: body.code.unwrap_or_else(|| "unknown".to_string()),
                message: body.message.unwrap_or_default(),
            };
            error!(error = %err, "News provider rejected request");
            return Err(err);
        }

        Ok(body
            .articles
            .into_iter()
            .filter_map(|article| article.into_news_article(category))
            .collect())
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn search(&self, params: &NewsSearchParams) -> Result<Vec<NewsArticle>, NewsError> {
        let mut query = vec![
            ("language", params.language.clone()),
            ("pageSize", params.page_size.to_string()),
            ("page", params.page.to_string()),
        ];
        if let Some(q) = params.provider_query() {
            query.push(("q", q));
        }

        self.fetch("everything", &query, None).await
    }

    async fn headlines(&self, params: &HeadlinesParams) -> Result<Vec<NewsArticle>, NewsError> {
        let mut query = vec![
            ("country", params.country.clone()),
            ("pageSize", params.page_size.to_string()),
        ];
        if let Some(category) = &params.category {
            query.push(("category", category.clone()));
        }

        self.fetch("top-headlines", &query, params.category.as_deref())
            .await
    }
}

// == Provider Wire Format ==
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiArticle {
    #[serde(default)]
    source: Option<ApiSource>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ApiSource {
    #[serde(default)]
    name: Option<String>,
}

impl ApiArticle {
    /// Articles without a title or URL are dropped. The URL doubles as the id.
    fn into_news_article(self, category: Option<&str>) -> Option<NewsArticle> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let url = self.url.filter(|u| !u.is_empty())?;

        Some(NewsArticle {
            id: Some(url.clone()),
            title,
            description: self.description,
            url,
            source: self
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            published_at: self.published_at,
            category: category.map(str::to_string),
            author: self.author,
            image_url: self.url_to_image,
        })
    }
}
