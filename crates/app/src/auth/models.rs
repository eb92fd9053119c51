//! Viewer Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserAccount>;

/// Role carried in the provider's user metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// The provider's default role, serialized as `"user"`.
    #[serde(rename = "user")]
    Customer,
}

impl Role {
    /// Interpret the provider's optional metadata role; anything other than
    /// `"admin"` (including absence) is a regular customer.
    #[must_use]
    pub fn from_metadata(role: Option<&str>) -> Self {
        match role {
            Some(value) if value.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::Customer,
        }
    }
}

/// The identity a request is evaluated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Authenticated { user: UserUuid, role: Role },
}

impl Viewer {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::Authenticated {
                role: Role::Admin,
                ..
            }
        )
    }

    #[must_use]
    pub const fn user_uuid(&self) -> Option<UserUuid> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user, .. } => Some(*user),
        }
    }
}

/// A user account as reported by the provider's admin API.
///
/// The application keeps no local users table; this shape exists only in
/// transit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub uuid: UserUuid,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_metadata_defaults_to_customer() {
        assert_eq!(Role::from_metadata(Some("admin")), Role::Admin);
        assert_eq!(Role::from_metadata(Some("ADMIN")), Role::Admin);
        assert_eq!(Role::from_metadata(Some("user")), Role::Customer);
        assert_eq!(Role::from_metadata(Some("moderator")), Role::Customer);
        assert_eq!(Role::from_metadata(None), Role::Customer);
    }

    #[test]
    fn viewer_accessors() {
        let user = UserUuid::new();

        let admin = Viewer::Authenticated {
            user,
            role: Role::Admin,
        };

        let customer = Viewer::Authenticated {
            user,
            role: Role::Customer,
        };

        assert!(admin.is_admin());
        assert!(admin.is_authenticated());
        assert!(!customer.is_admin());
        assert!(customer.is_authenticated());
        assert!(!Viewer::Anonymous.is_authenticated());
        assert_eq!(Viewer::Anonymous.user_uuid(), None);
        assert_eq!(customer.user_uuid(), Some(user));
    }
}
