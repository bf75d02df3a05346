//! Bookmark Handlers
//!
//! Create, list and delete the authenticated user's saved articles.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::extract::{ValidJson, ValidPath};
use super::AppState;
use crate::auth::CurrentUser;
use crate::error::{AppError, Result};
use crate::models::{BookmarkCreate, BookmarkResponse};

/// Handler for POST /api/v1/bookmarks
pub async fn create_bookmark_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidJson(req): ValidJson<BookmarkCreate>,
) -> Result<(StatusCode, Json<BookmarkResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let bookmark = state.db.create_bookmark(user.id, req).await?;
    info!(user_id = user.id, bookmark_id = bookmark.id, "Bookmark created");

    Ok((StatusCode::CREATED, Json(bookmark.into())))
}

/// Handler for GET /api/v1/bookmarks
pub async fn list_bookmarks_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<BookmarkResponse>> {
    let bookmarks = state.db.list_bookmarks(user.id).await;
    Json(bookmarks.into_iter().map(Into::into).collect())
}

/// Handler for DELETE /api/v1/bookmarks/:bookmark_id
pub async fn delete_bookmark_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidPath(bookmark_id): ValidPath<i64>,
) -> Result<StatusCode> {
    state.db.delete_bookmark(bookmark_id, user.id).await?;
    info!(user_id = user.id, bookmark_id, "Bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}
