//! User Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::auth::UserAccount;

use crate::{extensions::*, state::State};

/// A provider account, proxied for the back office.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    /// Account email address
    pub email: String,

    /// Account role: admin or user
    pub role: String,

    /// Whether the account may sign in
    pub is_active: bool,

    /// When the account was created
    pub created_at: String,
}

impl From<UserAccount> for UserResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            uuid: account.uuid.into(),
            email: account.email,
            role: match account.role {
                vitrine_app::auth::Role::Admin => "admin".to_string(),
                vitrine_app::auth::Role::Customer => "user".to_string(),
            },
            is_active: account.is_active,
            created_at: account.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    /// Every account known to the auth provider
    pub users: Vec<UserResponse>,
}

/// User Index Handler
///
/// Proxies the auth provider's admin user listing; there is no local
/// users table.
#[endpoint(
    tags("admin"),
    summary = "List Users",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UsersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .directory
        .list_users()
        .await
        .or_500("failed to list users")?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}
