/**
 * Register Handler
 *
 * `POST /api/account/register`
 *
 * # Registration Process
 *
 * 1. Parse the request body
 * 2. Create the user and wallet (see `auth::service::register`)
 * 3. Attach the session cookie
 * 4. Return the user projection
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::session::start_session;
use crate::backend::auth::service;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{ApiEnvelope, RegisterRequest};

/// Register handler
///
/// # Arguments
///
/// * `State(app_state)` - Request context
/// * `payload` - Registration body, or the reason it could not be parsed
///
/// # Returns
///
/// `{error: "", data: {id, username, fullname}}` with a `Set-Cookie` header
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a field failed validation; `error` is empty
/// * `409 Conflict` - Username or email already registered
/// * `500 Internal Server Error` - Database, hashing or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/account/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "wonderland",
///   "birthdate": "1990-05-04",
///   "fullname": "Alice Liddell",
///   "email": "alice@example.com"
/// }
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BackendError> {
    let Json(request) =
        payload.map_err(|rejection| BackendError::validation("body", rejection.body_text()))?;
    tracing::info!("Registration request for: {}", request.username);

    let user = service::register(&app_state.db, &request, app_state.config.bcrypt_cost).await?;
    let cookie = start_session(&app_state, &user)?;

    Ok(([(SET_COOKIE, cookie)], Json(ApiEnvelope::success(user.projection()))))
}
