/**
 * Verify Auth Handler
 *
 * `GET /api/account/verifyAuth`
 *
 * Reports whether the request carries a valid session cookie. The request
 * itself never fails: a missing, expired or forged token is `result: false`.
 */

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::backend::auth::cookies::extract_session_token;
use crate::backend::auth::sessions::SessionIssuer;
use crate::shared::{ApiEnvelope, VerifyAuthData};

/// Verify auth handler
///
/// # Returns
///
/// `{error: "", data: {result: bool}}`
pub async fn verify_auth(
    State(sessions): State<Arc<SessionIssuer>>,
    headers: HeaderMap,
) -> Json<ApiEnvelope<VerifyAuthData>> {
    let token = extract_session_token(&headers);
    let result = sessions.verify_token(token.as_deref());

    tracing::debug!("Session verification result: {}", result);
    Json(ApiEnvelope::success(VerifyAuthData { result }))
}
