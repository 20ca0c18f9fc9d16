//! Account endpoints: email lookup and password change.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;

use crate::BackendClient;
use crate::error::ApiError;

const USERS_PATH: &str = "users";

/// Account operations the user page depends on.
///
/// [`BackendClient`] is the production implementation; tests substitute
/// their own.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Fetch the email address of `user_id`.
    async fn fetch_email(&self, user_id: &str) -> Result<String, ApiError>;

    /// Change the password of the account identified by `request.email`.
    async fn update_password(&self, request: &UpdatePasswordRequest) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailRequest<'a> {
    user_id: &'a str,
}

/// Body of a successful email lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailResponse {
    pub email: String,
}

/// Body of a password change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub email: String,
    pub old_password: String,
    pub updated_password: String,
}

#[async_trait]
impl AccountApi for BackendClient {
    async fn fetch_email(&self, user_id: &str) -> Result<String, ApiError> {
        let response: EmailResponse = self
            .send_json(Method::POST, USERS_PATH, &EmailRequest { user_id })
            .await?;
        Ok(response.email)
    }

    async fn update_password(&self, request: &UpdatePasswordRequest) -> Result<(), ApiError> {
        self.send_json_unit(Method::PATCH, USERS_PATH, request).await
    }
}
