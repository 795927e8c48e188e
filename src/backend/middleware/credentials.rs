/**
 * Credential Guard
 *
 * `VerifiedCredentials` is an extractor that consumes the sign-in body and
 * checks it against the stored password hash. A handler that takes it as an
 * argument only runs for a correct username/password pair; any failure is
 * answered before the handler body executes.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};

use crate::backend::auth::service::validate_credentials;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SignInRequest;

/// User whose credentials were checked by the guard
#[derive(Debug, Clone)]
pub struct VerifiedCredentials(pub User);

impl FromRequest<AppState> for VerifiedCredentials {
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(credentials) = Json::<SignInRequest>::from_request(request, state)
            .await
            .map_err(|rejection| BackendError::validation("body", rejection.body_text()))?;

        tracing::info!("Sign in request for: {}", credentials.username);
        let user = validate_credentials(&state.db, &credentials.username, &credentials.password).await?;

        Ok(VerifiedCredentials(user))
    }
}
