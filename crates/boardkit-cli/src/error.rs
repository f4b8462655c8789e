//! CLI-specific error types and mappings.
//!
//! This module maps facade errors to exit codes and user-facing messages.

use boardkit_core::ApiPortError;
use boardkit_gui::GuiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The board API rejected the request.
    #[error("{0}")]
    Api(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Operation conflicts with the current state.
    #[error("{0}")]
    Conflict(String),

    /// The board API could not be reached or refused our credentials.
    #[error("Board API unavailable: {0}")]
    Unavailable(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Api(_) => 1,
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Internal(_) => 70,    // EX_SOFTWARE
            Self::Conflict(_) => 75,    // EX_TEMPFAIL
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<GuiError> for CliError {
    fn from(err: GuiError) -> Self {
        match err {
            GuiError::NotFound { .. } => Self::NotFound(err.to_string()),
            GuiError::ValidationFailed(msg) => Self::Arguments(msg),
            GuiError::Conflict(msg) => Self::Conflict(msg),
            GuiError::Unavailable(msg) => Self::Unavailable(msg),
            GuiError::Api(ApiPortError::NotFound { message }) => Self::NotFound(message),
            GuiError::Api(api) => Self::Api(api.message().to_string()),
            GuiError::Cancelled => Self::Internal(err.to_string()),
            GuiError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<ApiPortError> for CliError {
    fn from(err: ApiPortError) -> Self {
        match err {
            ApiPortError::Configuration { message } => Self::Config(message),
            other => GuiError::from(other).into(),
        }
    }
}
