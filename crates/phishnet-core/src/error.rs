//! Centralized error types for PhishNet.

use thiserror::Error;

/// Main error type for local PhishNet operations.
#[derive(Error, Debug)]
pub enum PhishnetError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid analysis result: {0}")]
    InvalidResult(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for PhishNet operations.
pub type PhishnetResult<T> = Result<T, PhishnetError>;

impl PhishnetError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create an invalid result error.
    pub fn invalid_result(msg: impl Into<String>) -> Self {
        Self::InvalidResult(msg.into())
    }

    /// The message shown inline next to the form, if this is a validation error.
    pub fn inline_message(&self) -> Option<&str> {
        match self {
            Self::ValidationError(msg) => Some(msg),
            _ => None,
        }
    }
}
