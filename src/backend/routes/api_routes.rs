/**
 * API Routes
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/account/register` - Create an account and start a session
 * - `POST /api/account/signin` - Start a session (credential guard)
 * - `GET /api/account/verifyAuth` - Report whether the session cookie is valid
 *
 * ## Session guarded
 * - `POST /api/account/signout` - End the session
 * - `GET /api/account/user` - Current user projection
 * - `GET /api/wallet/balance` - Wallet balance
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, register, signin, signout, verify_auth};
use crate::backend::middleware::require_session;
use crate::backend::server::state::AppState;
use crate::backend::wallet::get_balance;
use crate::shared::account::{
    BALANCE_PATH, CURRENT_USER_PATH, REGISTER_PATH, SIGNIN_PATH, SIGNOUT_PATH, VERIFY_AUTH_PATH,
};

/// Add the account and wallet routes to a router
///
/// The session guard is attached with `route_layer`, so it only runs for
/// matched guarded routes and unknown paths still fall through to the 404
/// handler.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route(SIGNOUT_PATH, post(signout))
        .route(CURRENT_USER_PATH, get(get_me))
        .route(BALANCE_PATH, get(get_balance))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), require_session));

    router
        .route(REGISTER_PATH, post(register))
        .route(SIGNIN_PATH, post(signin))
        .route(VERIFY_AUTH_PATH, get(verify_auth))
        .merge(guarded)
}
