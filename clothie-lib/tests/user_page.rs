//! Account page flows against a scripted backend.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use clothie_lib::Route;
use clothie_lib::api::{AccountApi, UpdatePasswordRequest};
use clothie_lib::error::ApiError;
use clothie_lib::pages::{DismissAction, Outcome, UserPage};
use clothie_lib::pages::user::{EMAIL, NEW_PASSWORD, NEW_PASSWORD_CHECK, OLD_PASSWORD};
use clothie_lib::session::{MemorySessionStore, Session, SessionContext};

/// Backend double answering from fixed results.
struct FakeAccounts {
    email: Result<String, (u16, &'static str)>,
    update: Result<(), (u16, &'static str)>,
    updates: Mutex<Vec<UpdatePasswordRequest>>,
}

impl FakeAccounts {
    fn ok() -> Self {
        Self {
            email: Ok("ada@example.com".to_string()),
            update: Ok(()),
            updates: Mutex::new(Vec::new()),
        }
    }

    fn email_fails(self) -> Self {
        Self {
            email: Err((401, "Unauthorized.")),
            ..self
        }
    }

    fn update_fails(self) -> Self {
        Self {
            update: Err((422, "Old password is wrong.")),
            ..self
        }
    }

    fn updates(&self) -> Vec<UpdatePasswordRequest> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountApi for FakeAccounts {
    async fn fetch_email(&self, _user_id: &str) -> Result<String, ApiError> {
        self.email
            .clone()
            .map_err(|(status, message)| ApiError::http(status, message))
    }

    async fn update_password(&self, request: &UpdatePasswordRequest) -> Result<(), ApiError> {
        self.updates.lock().unwrap().push(request.clone());
        self.update
            .map_err(|(status, message)| ApiError::http(status, message))
    }
}

/// Backend that never answers.
struct Unresponsive;

#[async_trait]
impl AccountApi for Unresponsive {
    async fn fetch_email(&self, _user_id: &str) -> Result<String, ApiError> {
        std::future::pending().await
    }

    async fn update_password(&self, _request: &UpdatePasswordRequest) -> Result<(), ApiError> {
        std::future::pending().await
    }
}

fn signed_in() -> SessionContext {
    SessionContext::new(MemorySessionStore::signed_in(Session::new("u1", "tok")))
}

fn fill_valid(page: &mut UserPage) {
    page.change(OLD_PASSWORD, "old123").unwrap();
    page.change(NEW_PASSWORD, "new1234").unwrap();
    page.change(NEW_PASSWORD_CHECK, "new1234").unwrap();
}

#[tokio::test]
async fn test_load_fills_email() {
    let mut page = UserPage::new(signed_in());
    page.load(&FakeAccounts::ok()).await;

    assert_eq!(page.email(), "ada@example.com");
    assert!(page.form().field(EMAIL).unwrap().is_valid());
    assert!(page.error().is_none());
    assert!(!page.is_loading());
    assert_eq!(page.dismiss_action(), DismissAction::ClearError);
}

#[tokio::test]
async fn test_failed_load_redirects_on_dismiss() {
    let mut page = UserPage::new(signed_in());
    page.load(&FakeAccounts::ok().email_fails()).await;

    assert_eq!(page.error(), Some("Unauthorized."));
    assert_eq!(page.dismiss_action(), DismissAction::ClearErrorAndRedirectHome);
    assert_eq!(page.dismiss_error(), Outcome::Navigate(Route::Home));
    assert!(page.error().is_none());
}

#[tokio::test]
async fn test_missing_session_is_an_error() {
    let mut page = UserPage::new(SessionContext::new(MemorySessionStore::new()));
    page.load(&FakeAccounts::ok()).await;

    assert_eq!(page.error(), Some("Please sign in first."));
    assert_eq!(page.dismiss_error(), Outcome::Navigate(Route::Home));
}

#[tokio::test]
async fn test_form_starts_disabled() {
    let mut page = UserPage::new(signed_in());
    page.load(&FakeAccounts::ok()).await;
    assert!(!page.can_submit());

    fill_valid(&mut page);
    assert!(page.can_submit());
}

#[tokio::test]
async fn test_submit_updates_and_logs_out() {
    let session = signed_in();
    let api = FakeAccounts::ok();
    let mut page = UserPage::new(session.clone());
    page.load(&api).await;
    fill_valid(&mut page);

    assert_eq!(page.submit(&api).await, Outcome::Navigate(Route::Home));
    assert_eq!(
        api.updates(),
        vec![UpdatePasswordRequest {
            email: "ada@example.com".to_string(),
            old_password: "old123".to_string(),
            updated_password: "new1234".to_string(),
        }]
    );
    assert_eq!(page.take_notice().as_deref(), Some(UserPage::PASSWORD_UPDATED));
    assert_eq!(page.take_notice(), None);
    assert!(session.current().unwrap().is_none());
}

#[tokio::test]
async fn test_failed_submit_keeps_session() {
    let session = signed_in();
    let api = FakeAccounts::ok().update_fails();
    let mut page = UserPage::new(session.clone());
    page.load(&api).await;
    fill_valid(&mut page);

    assert_eq!(page.submit(&api).await, Outcome::Stay);
    assert_eq!(page.error(), Some("Old password is wrong."));
    assert!(session.current().unwrap().is_some());

    // the email was fetched, so dismissing keeps the user here
    assert_eq!(page.dismiss_error(), Outcome::Stay);
}

#[tokio::test]
async fn test_invalid_submit_is_ignored() {
    let api = FakeAccounts::ok();
    let mut page = UserPage::new(signed_in());
    page.load(&api).await;
    page.change(OLD_PASSWORD, "old").unwrap();

    assert_eq!(page.submit(&api).await, Outcome::Stay);
    assert!(api.updates().is_empty());
    assert!(page.error().is_none());
}

#[tokio::test]
async fn test_check_lags_behind_new_password() {
    let api = FakeAccounts::ok();
    let mut page = UserPage::new(signed_in());
    page.load(&api).await;
    fill_valid(&mut page);

    // confirmation keeps its last verdict until edited again
    page.change(NEW_PASSWORD, "other12").unwrap();
    assert!(page.form().field(NEW_PASSWORD_CHECK).unwrap().is_valid());

    page.change(NEW_PASSWORD_CHECK, "new1234").unwrap();
    assert!(!page.form().field(NEW_PASSWORD_CHECK).unwrap().is_valid());
    assert!(!page.can_submit());
}

#[test]
fn test_logout_needs_confirmation() {
    let session = signed_in();
    let mut page = UserPage::new(session.clone());

    assert_eq!(page.logout(false), Outcome::Stay);
    assert!(session.current().unwrap().is_some());

    assert_eq!(page.logout(true), Outcome::Navigate(Route::Home));
    assert!(session.current().unwrap().is_none());
}

#[test]
fn test_unknown_field() {
    let mut page = UserPage::new(signed_in());
    assert!(page.change("nickname", "ada").is_err());
}

#[tokio::test]
async fn test_abandoned_submit_leaves_page_usable() {
    let api = FakeAccounts::ok();
    let mut page = UserPage::new(signed_in());
    page.load(&api).await;
    fill_valid(&mut page);

    let abandoned = tokio::time::timeout(Duration::from_millis(20), page.submit(&Unresponsive)).await;
    assert!(abandoned.is_err());
    assert!(!page.is_loading());

    assert_eq!(page.submit(&api).await, Outcome::Navigate(Route::Home));
    assert_eq!(api.updates().len(), 1);
}

#[tokio::test]
async fn test_abandoned_load_leaves_page_usable() {
    let mut page = UserPage::new(signed_in());

    let abandoned = tokio::time::timeout(Duration::from_millis(20), page.load(&Unresponsive)).await;
    assert!(abandoned.is_err());
    assert!(!page.is_loading());

    page.load(&FakeAccounts::ok()).await;
    assert_eq!(page.email(), "ada@example.com");
}

#[tokio::test]
async fn test_loading_is_visible_between_begin_and_finish() {
    let api = FakeAccounts::ok();
    let mut page = UserPage::new(signed_in());

    let user_id = page.begin_load().unwrap();
    assert_eq!(user_id, "u1");
    assert!(page.is_loading());
    assert!(page.begin_load().is_none());
    page.finish_load(&user_id, api.fetch_email(&user_id).await);
    assert!(!page.is_loading());

    fill_valid(&mut page);
    let request = page.begin_submit().unwrap();
    assert!(page.is_loading());
    // a second press while the first is in flight does nothing
    assert!(page.begin_submit().is_none());
    assert_eq!(page.submit(&api).await, Outcome::Stay);
    assert!(api.updates().is_empty());

    let result = api.update_password(&request).await;
    assert_eq!(page.finish_submit(&request, result), Outcome::Navigate(Route::Home));
    assert!(!page.is_loading());
}

#[test]
fn test_begin_load_without_session() {
    let mut page = UserPage::new(SessionContext::new(MemorySessionStore::new()));
    assert!(page.begin_load().is_none());
    assert!(!page.is_loading());
    assert_eq!(page.error(), Some("Please sign in first."));
}
