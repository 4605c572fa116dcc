//! Directions error types

use thiserror::Error;

/// Errors that can occur when fetching a route
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the Directions API failed
    #[error("Network error: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed with a non-success status
    #[error("API error: {0}")]
    RequestFailed(String),

    /// The API answered but reported a non-OK routing status
    #[error("Directions API returned {status}: {message}")]
    Api {
        /// Status string from the response body, e.g. "REQUEST_DENIED"
        status: String,
        /// Detail from error_message, empty when the API sent none
        message: String,
    },

    /// The API found no route between the given points
    #[error("No route found between the given points")]
    NoRouteFound,

    /// Failed to parse an API response
    #[error("Error parsing response: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectionsError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}
