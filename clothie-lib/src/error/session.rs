//! Session error types

/// Errors that can occur while reading or writing the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No user is signed in.
    #[error("Not signed in")]
    NotSignedIn,

    /// The session file could not be read or written.
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file is not valid session JSON.
    #[error("Session format error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SessionError {
    /// Returns the text shown to the user in the error dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotSignedIn => "Please sign in first.".to_string(),
            _ => super::GENERIC_MESSAGE.to_string(),
        }
    }
}
