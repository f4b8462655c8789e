//! Error types for board API port operations.

use thiserror::Error;

/// Errors from board API port operations.
///
/// Implementation-specific failures (HTTP, JSON) are mapped to these by
/// the adapter. Every variant carries a message fit for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiPortError {
    /// The board or a resource on it does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The backend refused the request and explained why.
    #[error("{message}")]
    Rejected {
        /// HTTP status of the rejection
        status: u16,
        /// Message from the response envelope
        message: String,
    },

    /// Missing or invalid API token.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Response could not be understood.
    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },

    /// Client configuration is unusable.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApiPortError {
    /// Human-readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Rejected { message, .. }
            | Self::Unauthorized { message }
            | Self::Network { message }
            | Self::InvalidResponse { message }
            | Self::Configuration { message } => message,
        }
    }
}

/// Result type alias for board API port operations.
pub type ApiResult<T> = Result<T, ApiPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_backend_message() {
        let err = ApiPortError::Rejected {
            status: 400,
            message: "Invalid API key format".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid API key format");
        assert_eq!(err.message(), "Invalid API key format");
    }

    #[test]
    fn test_categories_prefix_display() {
        let err = ApiPortError::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().starts_with("Network error"));
        assert_eq!(err.message(), "connection refused");
    }
}
