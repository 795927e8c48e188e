/**
 * Sign Out Handler
 *
 * `POST /api/account/signout`, behind the session guard. Clears the session
 * cookie and always reports success.
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookies::clear_session_cookie;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::config::ServerConfig;
use crate::shared::SignOutResponse;

/// Sign out handler
///
/// # Returns
///
/// `{message: "Sign out succeeded"}` with an expired `SESSIONID` cookie
pub async fn signout(
    State(config): State<Arc<ServerConfig>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, BackendError> {
    let cookie = clear_session_cookie(config.cookie_secure)
        .map_err(|e| BackendError::internal(format!("Failed to build session cookie: {e}")))?;

    tracing::info!("User signed out: {} ({})", user.username, user.user_id);
    Ok(([(SET_COOKIE, cookie)], Json(SignOutResponse::default())))
}
