//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop client and the backend. These types describe the JSON bodies
//! exchanged over the account and wallet HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code:
//!
//! - **`account`** - Request DTOs, the response envelope, the user projection,
//!   route paths and the session cookie name
//! - **`error`** - Validation errors both tiers can produce
//! - **`config`** - Client configuration builder and configuration errors

/// Account wire types and route paths
pub mod account;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use account::{
    ApiEnvelope, BalanceData, RegisterRequest, SignInRequest, SignOutResponse, UserProjection,
    VerifyAuthData, SESSION_COOKIE,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
