//! Error types

mod api;
mod form;
mod session;

pub use api::*;
pub use form::*;
pub use session::*;

/// Fallback dialog text when a failure carries no usable message.
pub const GENERIC_MESSAGE: &str = "Something went wrong, please try again.";

/// Top-level error for clothie operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backend request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A form event referenced a field the form does not declare.
    #[error(transparent)]
    Form(#[from] FormError),
}

impl Error {
    /// Returns the text shown to the user in the error dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            Self::Session(e) => e.user_message(),
            Self::Form(e) => e.to_string(),
        }
    }
}
