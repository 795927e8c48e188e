//! Shared Error Types
//!
//! Input validation failures. The registration rules run on the server; the
//! desktop form reports the same kind of problem before sending anything.
//!
//! ```rust
//! use walletbox::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Password must be at least 8 characters");
//! assert_eq!(error.field(), "password");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Input validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
