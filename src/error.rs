//! Error model used by content API client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Represents error conditions raised while talking to the content API, including HTTP errors with status and message, authentication failures, timeouts, network issues, serialization problems and other unexpected errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl ContentError {
    /// Constructs an HTTP error variant with the optional API `errorCode`.
    pub fn http(status: StatusCode, code: Option<String>, message: impl Into<String>) -> Self {
        ContentError::Http {
            status,
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ContentError {
    /// Converts reqwest errors into semantic ContentError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ContentError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            ContentError::Http {
                status,
                code: None,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            ContentError::Network(err.to_string())
        } else {
            ContentError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ContentError {
    /// Converts serde_json decode/encode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        ContentError::Serialization(err.to_string())
    }
}
