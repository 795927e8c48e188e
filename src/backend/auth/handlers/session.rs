/**
 * Session Issuing
 *
 * Shared by register and sign in: mint a token for the user and wrap it in
 * the `Set-Cookie` value.
 */

use axum::http::HeaderValue;

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Session cookie for a freshly authenticated user
pub(super) fn start_session(app_state: &AppState, user: &User) -> Result<HeaderValue, BackendError> {
    let token = app_state.sessions.create_token(user)?;

    session_cookie(&token, app_state.sessions.ttl_secs(), app_state.config.cookie_secure)
        .map_err(|e| BackendError::internal(format!("Failed to build session cookie: {e}")))
}
