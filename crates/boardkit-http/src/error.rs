//! Internal error types for board API requests.
//!
//! These errors are internal to `boardkit-http` and are mapped to
//! `ApiPortError` at the port boundary.

use thiserror::Error;

/// Result type alias for board API requests.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the board API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success status without a usable error envelope.
    #[error("Board API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The API answered with an error envelope.
    #[error("{message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Message from the envelope
        message: String,
    },

    /// The API returned something other than the expected envelope.
    #[error("Invalid response from board API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The configured base URL cannot carry path segments.
    #[error("Base URL cannot be used for API requests: {url}")]
    InvalidBaseUrl {
        /// The offending URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status attached to the error, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } | Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
