//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thiserror::Error;

use crate::auth::{
    models::{Role, UserAccount, Viewer},
    provider::{AuthProviderClient, AuthProviderError, SessionUser},
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The token is unknown, expired, or belongs to a deactivated account.
    #[error("not authenticated")]
    Unauthenticated,

    #[error("auth provider error")]
    Provider(#[from] AuthProviderError),
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("auth provider error")]
    Provider(#[from] AuthProviderError),
}

/// Resolves bearer tokens to viewers via the external provider.
#[derive(Debug, Clone)]
pub struct ProviderAuthService {
    client: AuthProviderClient,
}

impl ProviderAuthService {
    #[must_use]
    pub fn new(client: AuthProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for ProviderAuthService {
    async fn authenticate_bearer(&self, token: &str) -> Result<Viewer, AuthServiceError> {
        let user = self
            .client
            .session_user(token)
            .await?
            .ok_or(AuthServiceError::Unauthenticated)?;

        // Deactivated accounts keep their provider session until it expires;
        // they are treated as unknown here.
        if !user.user_metadata.is_active {
            return Err(AuthServiceError::Unauthenticated);
        }

        Ok(Viewer::Authenticated {
            user: user.id.into(),
            role: Role::from_metadata(user.user_metadata.role.as_deref()),
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to an authenticated viewer.
    async fn authenticate_bearer(&self, token: &str) -> Result<Viewer, AuthServiceError>;
}

/// Admin-only listing of provider accounts.
#[derive(Debug, Clone)]
pub struct ProviderUserDirectory {
    client: AuthProviderClient,
}

impl ProviderUserDirectory {
    #[must_use]
    pub fn new(client: AuthProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for ProviderUserDirectory {
    async fn list_users(&self) -> Result<Vec<UserAccount>, DirectoryError> {
        let users = self.client.list_users().await?;

        Ok(users.into_iter().map(into_account).collect())
    }
}

#[automock]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// List every account known to the auth provider.
    async fn list_users(&self) -> Result<Vec<UserAccount>, DirectoryError>;
}

fn into_account(user: SessionUser) -> UserAccount {
    UserAccount {
        uuid: user.id.into(),
        email: user.email,
        role: Role::from_metadata(user.user_metadata.role.as_deref()),
        is_active: user.user_metadata.is_active,
        created_at: user.created_at.unwrap_or(Timestamp::UNIX_EPOCH),
    }
}
