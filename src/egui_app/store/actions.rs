/**
 * Store Actions
 *
 * Everything that can change client state arrives as an `Action`. Views
 * dispatch the user-initiated ones; the effect runner dispatches the
 * follow-ups once a network call or the confirmation dialog resolves.
 */

use crate::egui_app::api::ApiError;
use crate::egui_app::store::errors::SignInError;
use crate::shared::{RegisterRequest, SignInRequest, UserProjection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the sign-in form
    SignIn(SignInRequest),
    /// Submit the registration form
    Register(RegisterRequest),
    /// Sign in or registration succeeded
    SignInSuccess(UserProjection),
    /// Sign in or registration failed
    SignInFailed(SignInError),

    /// Start signing out; asks for confirmation first
    SignOut,
    SignOutConfirmed,
    SignOutDeclined,
    SignOutSuccess,
    SignOutFailed(ApiError),

    /// Ask the server whether the session cookie is still valid
    VerifyAuth,
    AuthVerified { epoch: u64, result: bool },

    /// Load the signed-in user's projection
    GetUser,
    UserLoaded { epoch: u64, user: UserProjection },
    /// The server has no user for this session
    UserUnavailable { epoch: u64 },
    /// The server could not be asked; the session stays as it is
    UserLoadFailed(ApiError),
}

impl Action {
    /// Variant name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::SignIn(_) => "SignIn",
            Action::Register(_) => "Register",
            Action::SignInSuccess(_) => "SignInSuccess",
            Action::SignInFailed(_) => "SignInFailed",
            Action::SignOut => "SignOut",
            Action::SignOutConfirmed => "SignOutConfirmed",
            Action::SignOutDeclined => "SignOutDeclined",
            Action::SignOutSuccess => "SignOutSuccess",
            Action::SignOutFailed(_) => "SignOutFailed",
            Action::VerifyAuth => "VerifyAuth",
            Action::AuthVerified { .. } => "AuthVerified",
            Action::GetUser => "GetUser",
            Action::UserLoaded { .. } => "UserLoaded",
            Action::UserUnavailable { .. } => "UserUnavailable",
            Action::UserLoadFailed(_) => "UserLoadFailed",
        }
    }
}
