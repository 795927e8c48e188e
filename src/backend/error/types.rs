/**
 * Backend Error Types
 *
 * This module defines the error type returned by every handler, guard and
 * repository function on the server.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * Caused by the caller and reported with a 4xx status:
 * - Invalid registration input (`Validation`)
 * - Username or email already taken (`DuplicateUser`)
 * - Wrong username or password (`InvalidCredentials`)
 * - Missing or invalid session on a guarded route (`Unauthorized`)
 *
 * ## Infrastructure Errors
 *
 * Reported as 500 with a generic message; the detail only goes to the log:
 * - Database and migration failures
 * - Token signing failures
 * - Password hashing failures
 * - Balance conversion overflow
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::wallet::balance::BalanceError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request input failed validation
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// Offending field
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A user with the same username or email already exists
    #[error("A user with this {field} already exists")]
    DuplicateUser {
        /// `username` or `email`
        field: String,
    },

    /// Sign-in credentials did not match a user
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Missing, expired or forged session on a guarded route
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// Anything else that should never reach the client verbatim
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new duplicate-user error
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::DuplicateUser {
            field: field.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `DuplicateUser` - 409 Conflict
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateUser { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_)
            | Self::Migration(_)
            | Self::Token(_)
            | Self::PasswordHash(_)
            | Self::Balance(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to send to the client.
    ///
    /// Malformed or invalid request bodies get the empty placeholder; the
    /// detail only goes to the log. Server-side failures collapse to a
    /// generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { .. } => String::new(),
            _ if self.status_code().is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        let SharedError::ValidationError { field, message } = err;
        Self::Validation { field, message }
    }
}
