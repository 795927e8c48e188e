/**
 * Effects
 *
 * An `Effect` is work the reducer asked for. `run` performs exactly one
 * suspension (a network call or the confirmation wait) and turns its
 * outcome into exactly one follow-up `Action`.
 *
 * # Sign-in outcomes
 *
 * | Response                              | Action                                 |
 * |---------------------------------------|----------------------------------------|
 * | 2xx, empty `error`, user in `data`    | `SignInSuccess(user)`                  |
 * | 2xx, non-empty `error`                | `SignInFailed(InvalidCredentials)`     |
 * | 401                                   | `SignInFailed(InvalidCredentials)`     |
 * | anything else                         | `SignInFailed(CriticalError)`          |
 *
 * # Current-user outcomes
 *
 * A 401 means the session is gone (`UserUnavailable`). Any other failure says
 * nothing about the session and leaves it alone (`UserLoadFailed`).
 */

use crate::egui_app::api::{AccountBackend, ApiError};
use crate::egui_app::prompt::ConfirmationPrompt;
use crate::egui_app::store::actions::Action;
use crate::egui_app::store::errors::SignInError;
use crate::shared::{ApiEnvelope, RegisterRequest, SignInRequest, UserProjection};

/// Question shown before signing out
pub const SIGN_OUT_QUESTION: &str = "Are you sure you want to sign out?";

/// Shown when the server rejects a registration without saying why
pub const INVALID_REGISTRATION: &str = "The registration details were not accepted";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SignIn(SignInRequest),
    Register(RegisterRequest),
    ConfirmSignOut,
    SignOut,
    VerifyAuth { epoch: u64 },
    FetchUser { epoch: u64 },
}

/// Execute one effect and return the action it resolves to
pub async fn run<B, P>(effect: Effect, backend: &B, prompt: &P) -> Action
where
    B: AccountBackend,
    P: ConfirmationPrompt,
{
    match effect {
        Effect::SignIn(request) => sign_in_outcome(backend.sign_in(&request).await),
        Effect::Register(request) => register_outcome(backend.register(&request).await),
        Effect::ConfirmSignOut => {
            if prompt.confirm(SIGN_OUT_QUESTION).await {
                Action::SignOutConfirmed
            } else {
                Action::SignOutDeclined
            }
        }
        Effect::SignOut => match backend.sign_out().await {
            Ok(_) => Action::SignOutSuccess,
            Err(e) => {
                tracing::warn!("Sign out failed: {}", e);
                Action::SignOutFailed(e)
            }
        },
        Effect::VerifyAuth { epoch } => match backend.verify_auth().await {
            Ok(result) => Action::AuthVerified { epoch, result },
            Err(e) => {
                tracing::warn!("Session verification failed: {}", e);
                Action::AuthVerified { epoch, result: false }
            }
        },
        Effect::FetchUser { epoch } => match backend.current_user().await {
            Ok(user) => Action::UserLoaded { epoch, user },
            Err(e) if e.status() == Some(401) => {
                tracing::debug!("No current user: {}", e);
                Action::UserUnavailable { epoch }
            }
            Err(e) => {
                tracing::warn!("Could not load current user: {}", e);
                Action::UserLoadFailed(e)
            }
        },
    }
}

fn sign_in_outcome(result: Result<ApiEnvelope<UserProjection>, ApiError>) -> Action {
    match result {
        Ok(envelope) if !envelope.is_success() => {
            Action::SignInFailed(SignInError::InvalidCredentials)
        }
        Ok(ApiEnvelope { data: Some(user), .. }) => Action::SignInSuccess(user),
        Ok(_) => {
            tracing::error!("Sign in response carried no user");
            Action::SignInFailed(SignInError::CriticalError)
        }
        Err(e) if e.status() == Some(401) => Action::SignInFailed(SignInError::InvalidCredentials),
        Err(e) => {
            tracing::error!("Sign in failed: {}", e);
            Action::SignInFailed(SignInError::CriticalError)
        }
    }
}

fn register_outcome(result: Result<ApiEnvelope<UserProjection>, ApiError>) -> Action {
    match result {
        Ok(envelope) if !envelope.is_success() => {
            Action::SignInFailed(SignInError::Rejected(envelope.error))
        }
        Ok(ApiEnvelope { data: Some(user), .. }) => Action::SignInSuccess(user),
        Ok(_) => {
            tracing::error!("Registration response carried no user");
            Action::SignInFailed(SignInError::CriticalError)
        }
        Err(ApiError::Status {
            status: 400 | 409,
            message,
        }) if message.is_empty() => {
            Action::SignInFailed(SignInError::Rejected(INVALID_REGISTRATION.to_string()))
        }
        Err(ApiError::Status {
            status: 400 | 409,
            message,
        }) => Action::SignInFailed(SignInError::Rejected(message)),
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            Action::SignInFailed(SignInError::CriticalError)
        }
    }
}
