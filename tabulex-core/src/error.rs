//! Error types for the table engine and its collaborators.
//!
//! Provides comprehensive error handling for fetch, authentication and tag
//! reading operations using thiserror for proper error trait implementations.

use thiserror::Error;

/// Errors surfaced by the HTTP API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// 2xx response without a payload
    #[error("Empty response from server")]
    EmptyResponse,

    /// Non-success status with the server's message, when it sent one
    #[error("Request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    /// Body did not match the expected envelope
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Errors produced while resolving a table fetch.
#[derive(Debug, Error)]
pub enum TableError {
    /// No session token; the fetch was not attempted
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The remote signalled an expired or revoked session
    #[error("Authentication expired. Please login again.")]
    AuthenticationExpired,

    /// Any other remote failure
    #[error("{0}")]
    FetchFailed(String),
}

/// Authentication operation errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials were rejected
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration input failed validation
    #[error("Invalid email or password format")]
    InvalidRegistration,

    /// Network request failed
    #[error("Network error: {0}")]
    Network(String),

    /// Not authenticated
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Tag reader capability errors
#[derive(Debug, Error)]
pub enum TagError {
    #[error("NFC not supported")]
    Unsupported,

    #[error("NFC not enabled")]
    NotEnabled,

    #[error("Tag read failed: {0}")]
    ReadFailed(String),
}

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => AuthError::InvalidCredentials,
            ApiError::Http(e) => AuthError::Network(e.to_string()),
            other => AuthError::Internal(other.to_string()),
        }
    }
}
