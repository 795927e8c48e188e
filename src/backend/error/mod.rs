//! Backend Error Module
//!
//! This module defines the error type used by handlers, guards and
//! repositories on the server, and its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so a handler returning
//! `Result<_, BackendError>` can use `?` throughout. Guard rejections use the
//! same type, which means an unauthenticated request is answered with 401
//! before the handler body runs.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
