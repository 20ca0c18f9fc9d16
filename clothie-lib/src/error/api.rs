//! API error types

use std::time::Duration;

/// Errors that can occur during backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the backend's `{ "message" }` body, or a generic one.
        message: String,
    },

    /// Network error during the call.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid backend URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the backend response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Maps a reqwest error, singling out timeouts.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Option<Duration>) -> Self {
        match timeout {
            Some(duration) if err.is_timeout() => Self::Timeout(duration),
            _ => Self::Network(err),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the text shown to the user in the error dialog.
    ///
    /// Backend messages are shown as-is; transport failures get a generic
    /// message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            _ => super::GENERIC_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_reqwest(err, None)
    }
}
