/**
 * Account Wire Types
 *
 * This module defines the JSON bodies exchanged between the desktop client
 * and the account endpoints, together with the route paths and the name of
 * the session cookie. Both tiers compile against these definitions so the
 * two sides cannot drift apart.
 *
 * # Response Envelope
 *
 * Every account endpoint except sign out answers with an envelope:
 *
 * ```json
 * { "error": "", "data": { "id": "…", "username": "alice", "fullname": "Alice A." } }
 * ```
 *
 * An empty `error` string means success. Failures carry a message in `error`
 * and `null` in `data`.
 */

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "SESSIONID";

/// `POST` - create an account and start a session
pub const REGISTER_PATH: &str = "/api/account/register";
/// `POST` - check credentials and start a session
pub const SIGNIN_PATH: &str = "/api/account/signin";
/// `POST` - end the current session
pub const SIGNOUT_PATH: &str = "/api/account/signout";
/// `GET` - report whether the session cookie is valid
pub const VERIFY_AUTH_PATH: &str = "/api/account/verifyAuth";
/// `GET` - projection of the signed-in user
pub const CURRENT_USER_PATH: &str = "/api/account/user";
/// `GET` - wallet balance of the signed-in user
pub const BALANCE_PATH: &str = "/api/wallet/balance";

/// Message returned by a successful sign out.
pub const SIGNOUT_MESSAGE: &str = "Sign out succeeded";

/// The information required to register a new user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Chosen username (3-30 chars, starts with a letter)
    pub username: String,
    /// Plain password, hashed before it is stored
    pub password: String,
    /// Date of birth, `YYYY-MM-DD`
    pub birthdate: NaiveDate,
    /// Display name
    pub fullname: String,
    /// Email address
    pub email: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("birthdate", &self.birthdate)
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .finish()
    }
}

/// Credentials submitted to the sign-in endpoint.
///
/// `username` may also hold an email address.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sanitized view of a user that is safe to hand to clients.
///
/// Never carries the password hash, email or birthdate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProjection {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Payload of `GET /api/account/verifyAuth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyAuthData {
    pub result: bool,
}

/// Payload of `GET /api/wallet/balance`.
///
/// The balance travels as a decimal string, e.g. `"4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceData {
    pub balance: Decimal,
}

/// Body of a successful sign out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignOutResponse {
    pub message: String,
}

impl Default for SignOutResponse {
    fn default() -> Self {
        Self {
            message: SIGNOUT_MESSAGE.to_string(),
        }
    }
}

/// `{error, data}` envelope used by the account and wallet endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Empty on success
    pub error: String,
    /// Present on success
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a successful payload.
    pub fn success(data: T) -> Self {
        Self {
            error: String::new(),
            data: Some(data),
        }
    }

    /// Build a failure envelope with no payload.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}
