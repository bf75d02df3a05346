//! News Handlers
//!
//! Search and headlines, proxied to the configured news provider.

use axum::{extract::State, Json};
use tracing::error;

use super::extract::ValidQuery;
use super::AppState;
use crate::auth::CurrentUser;
use crate::error::{AppError, Result};
use crate::models::{HeadlinesParams, NewsArticle, NewsSearchParams};

/// Handler for GET /api/v1/news/search
pub async fn search_news_handler(
    State(state): State<AppState>,
    _user: CurrentUser,
    ValidQuery(params): ValidQuery<NewsSearchParams>,
) -> Result<Json<Vec<NewsArticle>>> {
    if let Some(error_msg) = params.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let articles = state.news.search(&params).await.map_err(|err| {
        error!(error = %err, "News search failed");
        AppError::from(err)
    })?;

    Ok(Json(articles))
}

/// Handler for GET /api/v1/news/headlines
pub async fn headlines_handler(
    State(state): State<AppState>,
    _user: CurrentUser,
    ValidQuery(params): ValidQuery<HeadlinesParams>,
) -> Result<Json<Vec<NewsArticle>>> {
    if let Some(error_msg) = params.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let articles = state.news.headlines(&params).await.map_err(|err| {
        error!(error = %err, "Headlines fetch failed");
        AppError::from(err)
    })?;

    Ok(Json(articles))
}
