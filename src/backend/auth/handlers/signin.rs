/**
 * Sign In Handler
 *
 * `POST /api/account/signin`
 *
 * The credential check happens in the `VerifiedCredentials` guard, so this
 * handler only runs for a correct username/password pair.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::session::start_session;
use crate::backend::error::BackendError;
use crate::backend::middleware::VerifiedCredentials;
use crate::backend::server::state::AppState;
use crate::shared::ApiEnvelope;

/// Sign in handler
///
/// # Returns
///
/// `{error: "", data: {id, username, fullname}}` with a `Set-Cookie` header
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body (from the guard)
/// * `401 Unauthorized` - Unknown user or wrong password (from the guard)
/// * `500 Internal Server Error` - Token signing failure
pub async fn signin(
    State(app_state): State<AppState>,
    VerifiedCredentials(user): VerifiedCredentials,
) -> Result<impl IntoResponse, BackendError> {
    let cookie = start_session(&app_state, &user)?;

    tracing::info!("User signed in: {} ({})", user.username, user.id);
    Ok(([(SET_COOKIE, cookie)], Json(ApiEnvelope::success(user.projection()))))
}
