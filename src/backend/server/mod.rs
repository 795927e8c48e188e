//! Server Module
//!
//! Startup code for the Axum HTTP server.
//!
//! - **`config`** - Environment configuration and database bootstrap
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Builds the application router from a `ServerConfig`

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
