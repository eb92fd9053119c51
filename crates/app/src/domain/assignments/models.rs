//! Assignment Models

use jiff::Timestamp;
use rustc_hash::FxHashSet;

use crate::{auth::UserUuid, domain::products::models::ProductUuid};

/// A visibility edge: the product is shown to this user.
///
/// A product with no edges is public; a product with at least one edge is
/// shown only to its assigned users and to admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductAssignment {
    pub product_uuid: ProductUuid,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
}

/// Strip admin accounts from a desired assignment set.
///
/// Admins see every product regardless of edges, so storing an edge for one
/// would only make the product look restricted to them in the editor.
#[must_use]
pub fn without_admins(desired: Vec<UserUuid>, admins: &FxHashSet<UserUuid>) -> Vec<UserUuid> {
    desired
        .into_iter()
        .filter(|user| !admins.contains(user))
        .collect()
}
