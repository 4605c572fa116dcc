//! Discovery error types

use thiserror::Error;

/// Errors that can occur when talking to the discovery backend
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Backend reported a failure in its response envelope
    #[error("{error}: {message}")]
    Rejected {
        /// Error code or short description from the backend
        error: String,
        /// Human-readable detail, empty when the backend sent none
        message: String,
    },

    /// Failed to parse a backend response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request was rejected before it left the client
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Operation requires a logged-in session
    #[error("Authentication required. Please log in first.")]
    AuthenticationRequired,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DiscoveryError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}
