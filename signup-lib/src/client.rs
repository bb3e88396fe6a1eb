//! Registration endpoint client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::ApiError;
use crate::form::FormValues;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://webapis.bloomtechdev.com/registration";

/// Body of a successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationResponse {
    /// Message to show the user verbatim.
    pub message: String,
}

/// Backend the form submits to.
///
/// [`RegistrationClient`] is the HTTP implementation; tests and embedders can
/// supply their own.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use signup_lib::{RegistrationApi, RegistrationResponse};
/// use signup_lib::error::ApiError;
/// use signup_lib::form::FormValues;
///
/// struct AlwaysWelcome;
///
/// #[async_trait]
/// impl RegistrationApi for AlwaysWelcome {
///     async fn register(&self, values: &FormValues) -> Result<RegistrationResponse, ApiError> {
///         Ok(RegistrationResponse {
///             message: format!("Welcome, {}!", values.username),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Sends one registration attempt carrying `values`.
    async fn register(&self, values: &FormValues) -> Result<RegistrationResponse, ApiError>;
}

/// HTTP client for the registration endpoint.
///
/// This client is cheap to clone (uses `Arc` internally). It issues exactly
/// one POST per call: no retries, no timeout, no cancellation.
///
/// # Example
///
/// ```ignore
/// use signup_lib::RegistrationClient;
///
/// let client = RegistrationClient::builder()
///     .endpoint("http://localhost:9000/api/registration")
///     .build()?;
/// ```
#[derive(Clone)]
pub struct RegistrationClient {
    inner: Arc<RegistrationClientInner>,
}

struct RegistrationClientInner {
    endpoint: Url,
    http_client: Client,
}

impl RegistrationClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> RegistrationClientBuilder {
        RegistrationClientBuilder::new()
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(&self, values: &FormValues) -> Result<RegistrationResponse, ApiError> {
        let response = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .json(values)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::http(status.as_u16(), body))
        }
    }
}

impl std::fmt::Debug for RegistrationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish()
    }
}

/// Builder for constructing a [`RegistrationClient`].
pub struct RegistrationClientBuilder {
    endpoint: String,
    http_client: Option<Client>,
}

impl RegistrationClientBuilder {
    /// Creates a new builder pointing at [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: None,
        }
    }

    /// Sets the registration endpoint URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`RegistrationClient`].
    pub fn build(self) -> Result<RegistrationClient, ApiError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.endpoint, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(RegistrationClient {
            inner: Arc::new(RegistrationClientInner {
                endpoint,
                http_client,
            }),
        })
    }
}

impl Default for RegistrationClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
