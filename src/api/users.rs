//! User Handlers
//!
//! Registration and lookup of the authenticated user.

use axum::{extract::State, http::StatusCode, Json};

use super::extract::ValidJson;
use super::AppState;
use crate::auth::CurrentUser;
use crate::error::{AppError, Result};
use crate::models::{RegisterRequest, UserResponse};

/// Handler for POST /api/v1/register
pub async fn register_handler(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let user = state.db.create_user(&req.email, &req.firebase_uid).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Handler for GET /api/v1/me
pub async fn me_handler(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
