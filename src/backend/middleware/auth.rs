/**
 * Session Guard
 *
 * This module provides the middleware that protects routes requiring a
 * signed-in user. It reads the session token from the `SESSIONID` cookie,
 * verifies it and makes the user available to handlers.
 *
 * Requests without a valid session are rejected with 401 before the handler
 * body runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::cookies::extract_session_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Session middleware
///
/// This middleware:
/// 1. Extracts the session token from the `Cookie` header
/// 2. Verifies signature and expiry
/// 3. Checks that the user still exists
/// 4. Attaches the user to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid
pub async fn require_session(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_session_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing session cookie on {}", request.uri().path());
        BackendError::Unauthorized
    })?;

    let claims = app_state.sessions.decode(&token).map_err(|e| {
        tracing::warn!("Invalid session token: {}", e);
        BackendError::Unauthorized
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Session token carries a malformed user id");
        BackendError::Unauthorized
    })?;

    let user = get_user_by_id(&app_state.db, user_id).await?.ok_or_else(|| {
        tracing::warn!("Session for unknown user: {}", user_id);
        BackendError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `require_session`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
