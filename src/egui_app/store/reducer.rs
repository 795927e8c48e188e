/**
 * Reducer
 *
 * `reduce` is a pure function from the current snapshot and one action to
 * the next snapshot plus the effects to run. It performs no I/O; network
 * calls and the confirmation dialog are described as `Effect`s and executed
 * by `store::effects::run`.
 *
 * # Transitions
 *
 * Sign in page: `idle -> pending -> {success, failed}`
 * Sign out: `idle -> awaiting confirmation -> {declined -> idle, confirmed -> pending -> {success, failed}}`
 *
 * Actions that arrive while the same flow is already pending are ignored:
 * the attempt in flight finishes first.
 *
 * Session checks (`VerifyAuth`, `GetUser`) are tagged with the snapshot's
 * `session_epoch`. A sign in or sign out bumps the epoch, so an answer to a
 * check started before it no longer applies and is dropped.
 */

use crate::egui_app::store::actions::Action;
use crate::egui_app::store::effects::Effect;
use crate::egui_app::store::state::{
    AppSnapshot, AuthStatusState, SignInPageState, SignOutState,
};

/// Apply one action to a snapshot
pub fn reduce(snapshot: &AppSnapshot, action: Action) -> (AppSnapshot, Vec<Effect>) {
    let mut next = snapshot.clone();
    let mut effects = Vec::new();

    match action {
        Action::SignIn(request) => {
            if !snapshot.sign_in_page.pending {
                next.sign_in_page = SignInPageState {
                    pending: true,
                    error: None,
                };
                effects.push(Effect::SignIn(request));
            }
        }
        Action::Register(request) => {
            if !snapshot.sign_in_page.pending {
                next.sign_in_page = SignInPageState {
                    pending: true,
                    error: None,
                };
                effects.push(Effect::Register(request));
            }
        }
        Action::SignInSuccess(user) => {
            next = AppSnapshot {
                auth_status: AuthStatusState {
                    signed_in: true,
                    user: Some(user),
                },
                session_epoch: snapshot.session_epoch + 1,
                ..AppSnapshot::default()
            };
        }
        Action::SignInFailed(error) => {
            next.sign_in_page = SignInPageState {
                pending: false,
                error: Some(error),
            };
        }

        Action::SignOut => {
            if !snapshot.sign_out.pending {
                next.sign_out = SignOutState {
                    pending: true,
                    awaiting_confirmation: true,
                    errors: None,
                };
                effects.push(Effect::ConfirmSignOut);
            }
        }
        Action::SignOutConfirmed => {
            if snapshot.sign_out.awaiting_confirmation {
                next.sign_out.awaiting_confirmation = false;
                effects.push(Effect::SignOut);
            }
        }
        Action::SignOutDeclined => {
            next.sign_out.pending = false;
            next.sign_out.awaiting_confirmation = false;
        }
        Action::SignOutSuccess => {
            next = AppSnapshot {
                session_epoch: snapshot.session_epoch + 1,
                ..AppSnapshot::default()
            };
        }
        Action::SignOutFailed(error) => {
            next.sign_out = SignOutState {
                pending: false,
                awaiting_confirmation: false,
                errors: Some(error),
            };
        }

        Action::VerifyAuth => effects.push(Effect::VerifyAuth {
            epoch: snapshot.session_epoch,
        }),
        Action::AuthVerified { epoch, .. } if epoch != snapshot.session_epoch => {}
        Action::AuthVerified { result: true, .. } => {
            next.auth_status.signed_in = true;
            if next.auth_status.user.is_none() {
                effects.push(Effect::FetchUser {
                    epoch: snapshot.session_epoch,
                });
            }
        }
        Action::AuthVerified { result: false, .. } => {
            next.auth_status = AuthStatusState::default();
        }

        Action::GetUser => effects.push(Effect::FetchUser {
            epoch: snapshot.session_epoch,
        }),
        Action::UserLoaded { epoch, user } => {
            if epoch == snapshot.session_epoch {
                next.auth_status = AuthStatusState {
                    signed_in: true,
                    user: Some(user),
                };
            }
        }
        Action::UserUnavailable { epoch } => {
            if epoch == snapshot.session_epoch {
                next.auth_status = AuthStatusState::default();
            }
        }
        Action::UserLoadFailed(_) => {}
    }

    (next, effects)
}
