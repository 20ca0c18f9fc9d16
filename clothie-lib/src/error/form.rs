//! Form error types

/// Errors raised by the form field controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No field with this id is declared on the form.
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(id: impl Into<String>) -> Self {
        Self::UnknownField(id.into())
    }
}
