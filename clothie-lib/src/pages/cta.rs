//! Call-to-action signup section on the home page.

use crate::error::FormError;
use crate::form::{FieldSpec, Form, FormEvent, InputKind};
use crate::validation::{email, max_length, min_length, password_match, required};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PASSWORD_AGAIN: &str = "password-again";

/// Credentials collected by a valid signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSubmission {
    pub email: String,
    pub password: String,
}

/// The signup form shown under the home page banner.
#[derive(Debug, Clone)]
pub struct SignupCta {
    form: Form,
}

impl SignupCta {
    pub const TITLE: &'static str = "sign up, to start elegant life.";
    pub const SUBMIT_LABEL: &'static str = "Sign up";

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FieldSpec::new(EMAIL, "Email")
                    .kind(InputKind::Email)
                    .validators(vec![required(), email()])
                    .error_text("Please enter a valid email"),
                FieldSpec::new(PASSWORD, "Password")
                    .kind(InputKind::Password)
                    .validators(vec![min_length(6), max_length(10)])
                    .error_text("Password must be 6 to 10 characters"),
                FieldSpec::new(PASSWORD_AGAIN, "Password again")
                    .kind(InputKind::Password)
                    .validators(vec![password_match("")])
                    .error_text("Does not match the password entered"),
            ]),
        }
    }

    /// Apply a keystroke-level change to one field.
    ///
    /// Changing the password rebuilds the confirmation rule with the new
    /// reference; the confirmation's validity catches up on its own next
    /// change.
    pub fn change(&mut self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        if id == PASSWORD {
            self.form
                .set_validators(PASSWORD_AGAIN, vec![password_match(value.clone())])?;
        }
        self.form.handle(FormEvent::changed(id, value))
    }

    /// The submission, if every field is valid.
    pub fn submit(&self) -> Option<SignupSubmission> {
        if !self.form.is_valid() {
            log::debug!("signup submitted while invalid");
            return None;
        }
        Some(SignupSubmission {
            email: self.form.value(EMAIL).to_string(),
            password: self.form.value(PASSWORD).to_string(),
        })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }
}

impl Default for SignupCta {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signup() {
        let mut cta = SignupCta::new();
        cta.change(EMAIL, "ada@example.com").unwrap();
        cta.change(PASSWORD, "secret1").unwrap();
        cta.change(PASSWORD_AGAIN, "secret1").unwrap();

        assert_eq!(
            cta.submit(),
            Some(SignupSubmission {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
            })
        );
    }

    #[test]
    fn test_starts_invalid() {
        assert!(SignupCta::new().submit().is_none());
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut cta = SignupCta::new();
        cta.change(EMAIL, "ada@example.com").unwrap();
        cta.change(PASSWORD, "secret1").unwrap();
        cta.change(PASSWORD_AGAIN, "Secret1").unwrap();
        assert!(cta.submit().is_none());
        assert_eq!(
            cta.form().error_text(PASSWORD_AGAIN),
            Some("Does not match the password entered")
        );
    }

    #[test]
    fn test_confirmation_lags_password_change() {
        let mut cta = SignupCta::new();
        cta.change(EMAIL, "ada@example.com").unwrap();
        cta.change(PASSWORD, "secret1").unwrap();
        cta.change(PASSWORD_AGAIN, "secret1").unwrap();

        cta.change(PASSWORD, "secret2").unwrap();
        assert!(cta.submit().is_some());

        cta.change(PASSWORD_AGAIN, "secret1").unwrap();
        assert!(cta.submit().is_none());
    }

    #[test]
    fn test_unknown_field() {
        let mut cta = SignupCta::new();
        assert!(cta.change("phone", "123").is_err());
    }
}
