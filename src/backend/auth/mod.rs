//! Authentication Module
//!
//! Registration, sign in and session management for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session token issuing and verification
//! ├── cookies.rs      - SESSIONID cookie building and parsing
//! ├── service.rs      - Registration and credential checks
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: details validated → user and wallet created → session cookie set
//! 2. **Sign in**: credential guard checks the password → session cookie set
//! 3. **Verify**: cookie read → `result: true/false`, never an error
//! 4. **Sign out**: session guard → cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are HS256 JWTs in an `HttpOnly` cookie
//! - Invalid credentials return 401 without saying which part was wrong
//! - Responses carry the user projection only, never the hash

/// User data model and database operations
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// Session cookie helpers
pub mod cookies;

/// Registration and credential checks
pub mod service;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::{get_me, register, signin, signout, verify_auth};
pub use sessions::SessionIssuer;
pub use users::User;
