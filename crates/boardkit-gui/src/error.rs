//! Semantic error types for settings panel operations.
//!
//! These errors are domain-focused, not transport-focused. Front ends map
//! `GuiError` to whatever they show (banner, toast, exit code).

use std::fmt;

use boardkit_core::ApiPortError;

/// Semantic errors for settings panel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Entity not found (404-ish).
    NotFound {
        /// Type of entity (e.g., "credential", "tool server", "offering").
        entity: &'static str,
        /// Identifier that was not found.
        id: String,
    },

    /// Request validation failed (400-ish).
    ValidationFailed(String),

    /// Operation conflicts with current state (409-ish).
    Conflict(String),

    /// Backend is unreachable or refused our credentials.
    Unavailable(String),

    /// The board API rejected or failed the request.
    Api(ApiPortError),

    /// The panel was closed or reopened while the operation was running.
    Cancelled,

    /// Unexpected internal error.
    Internal(String),
}

impl GuiError {
    /// Message suitable for the panel's error banner.
    pub fn banner(&self) -> String {
        match self {
            Self::Api(err) => err.message().to_string(),
            Self::ValidationFailed(msg) | Self::Conflict(msg) | Self::Unavailable(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }

    /// Banner for a failed API call, falling back to `fallback` when the
    /// backend gave no message.
    pub fn banner_or(&self, fallback: &str) -> String {
        let banner = self.banner();
        if banner.trim().is_empty() {
            fallback.to_string()
        } else {
            banner
        }
    }
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
            Self::Api(err) => write!(f, "{err}"),
            Self::Cancelled => write!(f, "operation cancelled: settings panel closed"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

// ============================================================================
// Conversions from port errors
// ============================================================================

impl From<ApiPortError> for GuiError {
    fn from(err: ApiPortError) -> Self {
        match err {
            ApiPortError::Network { message } => Self::Unavailable(message),
            ApiPortError::Unauthorized { message } => {
                Self::Unavailable(format!("unauthorized: {message}"))
            }
            ApiPortError::Configuration { message } => Self::Internal(message),
            other => Self::Api(other),
        }
    }
}
