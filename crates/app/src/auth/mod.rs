//! Viewer identity, resolved against the external auth provider.

pub mod models;
pub mod provider;
pub mod service;

pub use models::{Role, UserAccount, UserUuid, Viewer};
pub use provider::{AuthProviderClient, AuthProviderConfig, AuthProviderError};
pub use service::*;
