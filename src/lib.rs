//! walletbox - Main Library
//!
//! Account and wallet service with a native desktop client.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - Request/response bodies, the `{error, data}` envelope, route paths
//!   - Session cookie name
//!   - Shared error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server
//!   - Registration, sign in, sign out, session verification
//!   - Session tokens in the `SESSIONID` cookie
//!   - Wallets with decimal balances, persisted in SQLite
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Client auth store: pure reducer plus effect runner
//!   - Sign-in / register page and sign-out confirmation
//!   - reqwest client with a cookie jar
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server-side code, pulls in axum, bcrypt and jsonwebtoken
//!
//! # Binaries
//!
//! - `walletbox-server` - HTTP server (`ssr`)
//! - `walletbox-app` - Desktop client

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod egui_app;
