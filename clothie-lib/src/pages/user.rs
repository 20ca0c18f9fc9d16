//! User account page: profile, password change and logout.

use super::Outcome;
use crate::api::{AccountApi, UpdatePasswordRequest};
use crate::error::{ApiError, Error, FormError};
use crate::form::{FieldSpec, Form, FormEvent, InputKind};
use crate::route::Route;
use crate::session::SessionContext;
use crate::validation::{email, max_length, min_length, password_match};

pub const EMAIL: &str = "email";
pub const OLD_PASSWORD: &str = "oldPassword";
pub const NEW_PASSWORD: &str = "newPassword";
pub const NEW_PASSWORD_CHECK: &str = "newPasswordCheck";

/// How dismissing the error dialog behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    /// Close the dialog and stay on the page.
    ClearError,
    /// Close the dialog and leave for the home page.
    ClearErrorAndRedirectHome,
}

/// State of the account page.
#[derive(Debug)]
pub struct UserPage {
    form: Form,
    session: SessionContext,
    is_loading: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl UserPage {
    pub const CATALOG: [&'static str; 3] = ["Profile", "Order history", "Log out"];
    pub const SUBMIT_LABEL: &'static str = "Update";
    pub const LOGOUT_PROMPT: &'static str = "Log out?";
    pub const PASSWORD_UPDATED: &'static str = "Password updated, please sign in again.";

    pub fn new(session: SessionContext) -> Self {
        Self {
            form: Form::new(vec![
                FieldSpec::new(EMAIL, "Email")
                    .kind(InputKind::Email)
                    .validators(vec![email()])
                    .initial("", true)
                    .read_only(),
                FieldSpec::new(OLD_PASSWORD, "Old password")
                    .kind(InputKind::Password)
                    .validators(vec![min_length(6), max_length(10)])
                    .error_text("Old password length is incorrect"),
                FieldSpec::new(NEW_PASSWORD, "New password")
                    .kind(InputKind::Password)
                    .validators(vec![min_length(6), max_length(10)])
                    .error_text("Password must be 6 to 10 characters"),
                FieldSpec::new(NEW_PASSWORD_CHECK, "New password again")
                    .kind(InputKind::Password)
                    .validators(vec![password_match("")])
                    .error_text("Does not match the password entered"),
            ]),
            session,
            is_loading: false,
            error: None,
            notice: None,
        }
    }

    /// Fetch the signed-in user's email into the read-only email field.
    ///
    /// Any failure, including a missing session, is kept as the page error.
    /// Dropping the future mid-request leaves the page idle again.
    pub async fn load<A>(&mut self, api: &A)
    where
        A: AccountApi + ?Sized,
    {
        let Some(user_id) = self.begin_load() else { return };
        let result = {
            let _pending = Pending(&mut self.is_loading);
            api.fetch_email(&user_id).await
        };
        self.finish_load(&user_id, result);
    }

    /// Start loading: returns the user id to fetch and marks the page busy.
    ///
    /// `None` when already busy or when no one is signed in (the latter
    /// records the page error).
    pub fn begin_load(&mut self) -> Option<String> {
        if self.is_loading {
            return None;
        }
        match self.session.user_id() {
            Ok(user_id) => {
                self.is_loading = true;
                Some(user_id)
            }
            Err(e) => {
                log::warn!("account page opened without a session: {}", e);
                self.error = Some(e.user_message());
                None
            }
        }
    }

    /// Apply the result of a fetch started with [`begin_load`](Self::begin_load).
    pub fn finish_load(&mut self, user_id: &str, result: Result<String, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(email) => {
                log::debug!("fetched email for user {}", user_id);
                if let Err(e) = self.form.handle(FormEvent::loaded(EMAIL, email, true)) {
                    self.fail(e.into());
                }
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Apply a change to one of the editable fields.
    ///
    /// A new password rebuilds the confirmation rule; the confirmation is
    /// re-checked only when it changes itself.
    pub fn change(&mut self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        if id == NEW_PASSWORD {
            self.form
                .set_validators(NEW_PASSWORD_CHECK, vec![password_match(value.clone())])?;
        }
        self.form.handle(FormEvent::changed(id, value))
    }

    /// Send the password change.
    ///
    /// Does nothing while a request is in flight or the form is invalid. On
    /// success the session ends and the page navigates home. Dropping the
    /// future mid-request leaves the page idle again.
    pub async fn submit<A>(&mut self, api: &A) -> Outcome
    where
        A: AccountApi + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return Outcome::Stay;
        };
        let result = {
            let _pending = Pending(&mut self.is_loading);
            api.update_password(&request).await
        };
        self.finish_submit(&request, result)
    }

    /// Start a password change: returns the request to send and marks the
    /// page busy. `None` while busy or when the form is invalid.
    pub fn begin_submit(&mut self) -> Option<UpdatePasswordRequest> {
        if self.is_loading || !self.can_submit() {
            log::debug!("password change ignored: loading={}", self.is_loading);
            return None;
        }
        self.is_loading = true;
        Some(UpdatePasswordRequest {
            email: self.email().to_string(),
            old_password: self.form.value(OLD_PASSWORD).to_string(),
            updated_password: self.form.value(NEW_PASSWORD).to_string(),
        })
    }

    /// Apply the result of a request started with [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, request: &UpdatePasswordRequest, result: Result<(), ApiError>) -> Outcome {
        self.is_loading = false;
        match result {
            Ok(()) => {
                log::info!("password updated for {}", request.email);
                self.notice = Some(Self::PASSWORD_UPDATED.to_string());
                self.end_session()
            }
            Err(e) => {
                self.fail(e.into());
                Outcome::Stay
            }
        }
    }

    /// Log out if the user confirmed [`LOGOUT_PROMPT`](Self::LOGOUT_PROMPT).
    pub fn logout(&mut self, confirmed: bool) -> Outcome {
        if !confirmed {
            return Outcome::Stay;
        }
        self.end_session()
    }

    /// What dismissing the current error does.
    ///
    /// An empty email means the prerequisite fetch never succeeded, which is
    /// treated as unauthorized access.
    pub fn dismiss_action(&self) -> DismissAction {
        if self.email().is_empty() {
            DismissAction::ClearErrorAndRedirectHome
        } else {
            DismissAction::ClearError
        }
    }

    /// Close the error dialog.
    pub fn dismiss_error(&mut self) -> Outcome {
        let action = self.dismiss_action();
        self.error = None;
        match action {
            DismissAction::ClearError => Outcome::Stay,
            DismissAction::ClearErrorAndRedirectHome => Outcome::Navigate(Route::Home),
        }
    }

    pub fn email(&self) -> &str {
        self.form.value(EMAIL)
    }

    /// `true` when the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Take the one-shot notice shown after a successful update.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    fn end_session(&mut self) -> Outcome {
        match self.session.logout() {
            Ok(()) => Outcome::Navigate(Route::Home),
            Err(e) => {
                self.fail(e.into());
                Outcome::Stay
            }
        }
    }

    fn fail(&mut self, error: Error) {
        log::warn!("account page error: {}", error);
        self.error = Some(error.user_message());
    }
}

/// Clears the busy flag when a request ends, including when it is dropped.
struct Pending<'a>(&'a mut bool);

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
