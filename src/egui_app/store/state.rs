/**
 * Store State
 *
 * Immutable snapshots of the client state. The reducer never edits a
 * snapshot in place; it returns a new one.
 */

use crate::egui_app::api::ApiError;
use crate::egui_app::store::errors::SignInError;
use crate::shared::UserProjection;

/// Transient state of the sign-in / register form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInPageState {
    /// A sign-in or registration request is in flight
    pub pending: bool,
    /// Outcome of the last failed attempt
    pub error: Option<SignInError>,
}

/// Global authentication status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthStatusState {
    pub signed_in: bool,
    pub user: Option<UserProjection>,
}

/// Sign-out flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignOutState {
    /// Sign out started and has not finished
    pub pending: bool,
    /// The confirmation dialog is open
    pub awaiting_confirmation: bool,
    /// Error from the last failed sign out
    pub errors: Option<ApiError>,
}

/// Whole client state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    pub sign_in_page: SignInPageState,
    pub auth_status: AuthStatusState,
    pub sign_out: SignOutState,
    /// Bumped on every sign in and sign out. Session checks carry the value
    /// they started under; answers from an older epoch are dropped.
    pub session_epoch: u64,
}

impl AppSnapshot {
    /// Signed-in user, if known
    pub fn user(&self) -> Option<&UserProjection> {
        self.auth_status.user.as_ref()
    }
}
