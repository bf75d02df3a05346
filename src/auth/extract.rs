//! Authenticated-user extractor.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::AppState;
use crate::db::User;
use crate::error::AppError;

// == Current User ==
/// The registered user behind the request's bearer token.
///
/// Rejects with 401 when the header is missing, the token does not verify,
/// or no user is registered for the verified identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by `require_user`
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let token = bearer_token(&parts.headers).ok_or_else(|| {
            AppError::Unauthorized("Authentication credentials not provided".to_string())
        })?;

        let uid = state.verifier.verify(token).map_err(|err| {
            debug!(error = %err, "Bearer token rejected");
            AppError::Unauthorized(err.to_string())
        })?;

        let user = state
            .db
            .find_user_by_firebase_uid(&uid)
            .await
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

        Ok(CurrentUser(user))
    }
}

// == Require User ==
/// Middleware that rejects unauthenticated requests before inner layers run.
///
/// Use with `axum::middleware::from_fn_with_state` ahead of the response
/// cache, so cached bodies on authenticated routes only reach callers who
/// pass the same checks as the handler. The resolved user is left in the
/// request extensions for the handler's `CurrentUser`.
pub async fn require_user(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state).await?;
    parts.extensions.insert(user);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}
