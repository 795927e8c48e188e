//! Account Handlers
//!
//! HTTP handlers for the `/api/account` routes. Guards are applied in the
//! router; the handlers assume they already ran.

mod session;

pub mod me;
pub mod register;
pub mod signin;
pub mod signout;
pub mod verify;

pub use me::get_me;
pub use register::register;
pub use signin::signin;
pub use signout::signout;
pub use verify::verify_auth;
