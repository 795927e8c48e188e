use thiserror::Error;

/// Why a sign-in or registration attempt failed, as shown on the sign-in page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    /// Wrong username or password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The service could not be reached or misbehaved
    #[error("Something went wrong on our side. Please try again later.")]
    CriticalError,

    /// The server refused the registration details
    #[error("{0}")]
    Rejected(String),
}
