//! Client error types.

use phishnet_core::PhishnetError;
use thiserror::Error;

/// Shown for anything that is not the user's fault.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or invalid local input; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-2xx status.
    #[error("API request failed ({status})\nURL: {url}\nDetails: {status_text}")]
    Transport {
        status: u16,
        url: String,
        status_text: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered 2xx with a body of the wrong shape.
    #[error("Unexpected response: {0}")]
    Protocol(String),

    #[error("A submission is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status of a transport failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for the user: the inline text for validation problems,
    /// a generic line for everything else.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Busy => "Please wait for the current submission to finish.".to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<PhishnetError> for ClientError {
    fn from(err: PhishnetError) -> Self {
        match err {
            PhishnetError::ValidationError(msg) => Self::Validation(msg),
            PhishnetError::InvalidResult(msg) => Self::Protocol(msg),
            PhishnetError::Json(e) => Self::Protocol(e.to_string()),
        }
    }
}
