//! Main BackendClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::error::GENERIC_MESSAGE;

/// HTTP client for the storefront backend.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use clothie_lib::BackendClient;
///
/// let client = BackendClient::builder()
///     .url("https://api.clothie.example/api/")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let email = client.fetch_email("64f0c2").await?;
/// ```
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl BackendClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> BackendClientBuilder<Missing> {
        BackendClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Joins `path` onto the base URL.
    ///
    /// The base is used verbatim, so it is expected to end in `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Sends a JSON request and decodes a JSON response.
    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.inner.timeout))?;
        serde_json::from_str(&text).map_err(|e| ApiError::parse_with_body(e.to_string(), text))
    }

    /// Sends a JSON request, discarding the response body.
    pub(crate) async fn send_json_unit<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send<B>(&self, method: Method, path: &str, body: &B) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        log::debug!("{} {}", method, url);

        let mut request = self.inner.http_client.request(method.clone(), &url).json(body);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.inner.timeout))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| GENERIC_MESSAGE.to_string());
        log::warn!("{} {} failed with {}: {}", method, url, status, message);

        Err(ApiError::http(status, message))
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`BackendClient`].
///
/// Uses the typestate pattern to ensure the URL is set at compile time.
pub struct BackendClientBuilder<Url> {
    url: Url,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl BackendClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the backend base URL, e.g. `https://host/api/`.
    pub fn url(self, url: impl Into<String>) -> BackendClientBuilder<Set<String>> {
        BackendClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for BackendClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> BackendClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl BackendClientBuilder<Set<String>> {
    /// Builds the [`BackendClient`].
    ///
    /// Fails if the URL does not parse or the HTTP client cannot be created.
    pub fn build(self) -> Result<BackendClient, ApiError> {
        let base_url = self.url.0;
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(BackendClient {
            inner: Arc::new(BackendClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
