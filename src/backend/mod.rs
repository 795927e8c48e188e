//! Backend Module
//!
//! Server-side code for walletbox: an Axum HTTP server exposing the account
//! and wallet endpoints.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route table, guard composition, router assembly
//! - **`auth`** - Users, session tokens, cookies, registration, handlers
//! - **`middleware`** - Session guard and credential guard
//! - **`wallet`** - Wallet model, balance conversion, balance endpoint
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request guards
//! ├── wallet/         - Wallets and balances
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` logs the request
//! 2. Guarded routes run `require_session`; sign in runs `VerifiedCredentials`
//! 3. The handler calls into `auth::service` or a repository
//! 4. Errors become `{error, data: null}` envelopes via `IntoResponse`

/// Server initialization, state and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request guards
pub mod middleware;

/// Wallets and balances
pub mod wallet;

/// Backend-specific error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
