//! HTTP client for the external auth provider.

use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::Deserialize;
use thiserror::Error;

/// Configuration for connecting to the auth provider.
#[derive(Debug, Clone)]
pub struct AuthProviderConfig {
    /// Provider base address, e.g. `"http://localhost:9999"`.
    pub addr: String,

    /// Service-role key used for the admin user listing.
    pub service_key: String,
}

/// HTTP client for session validation and the admin user directory.
#[derive(Debug, Clone)]
pub struct AuthProviderClient {
    config: AuthProviderConfig,
    http: Client,
}

impl AuthProviderClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: AuthProviderConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Resolve the user behind a bearer token.
    ///
    /// Returns `Ok(None)` when the provider rejects the token.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn session_user(
        &self,
        bearer_token: &str,
    ) -> Result<Option<SessionUser>, AuthProviderError> {
        let url = format!("{}/auth/v1/user", self.config.addr);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {bearer_token}"))
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AuthProviderError::UnexpectedResponse(format!(
                "session request failed with status {status}: {text}"
            )));
        }

        let parsed: SessionUser = response.json().await?;

        Ok(Some(parsed))
    }

    /// List every account, via the provider's service-key-guarded admin API.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn list_users(&self) -> Result<Vec<SessionUser>, AuthProviderError> {
        let url = format!("{}/auth/v1/admin/users", self.config.addr);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.service_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AuthProviderError::UnexpectedResponse(format!(
                "user listing failed with status {status}: {text}"
            )));
        }

        let parsed: UserListResponse = response.json().await?;

        Ok(parsed.users)
    }
}

/// The provider's user shape, shared by the session and admin endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: uuid::Uuid,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct UserListResponse {
    users: Vec<SessionUser>,
}

/// Errors that can occur when communicating with the auth provider.
#[derive(Debug, Error)]
pub enum AuthProviderError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response or unexpected body.
    #[error("unexpected response from auth provider: {0}")]
    UnexpectedResponse(String),
}
