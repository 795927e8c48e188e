//! Middleware Module
//!
//! Guards that run before the account handlers:
//!
//! - **`auth`** - `require_session` middleware and the `AuthUser` extractor
//! - **`credentials`** - `VerifiedCredentials` extractor for sign in

pub mod auth;
pub mod credentials;

pub use auth::{require_session, AuthUser, AuthenticatedUser};
pub use credentials::VerifiedCredentials;
