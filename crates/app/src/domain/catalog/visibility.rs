//! Product visibility rules.
//!
//! Assignment edges restrict who sees a product on the storefront. The
//! rules are deliberately simple set operations; all the subtlety is in
//! where the sets come from (see the service) and in the failure policy.

use rustc_hash::FxHashSet;

use crate::{
    auth::Viewer,
    domain::{
        categories::models::CategoryUuid,
        products::models::{Product, ProductUuid},
    },
};

/// What the storefront does when the restricted-set lookup fails.
///
/// Assignment is a merchandising feature, not an access-control boundary,
/// so availability wins: the catalog is shown unfiltered. Keeping the
/// policy as a named type lets tests assert the behavior is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityFallback {
    ShowAll,
}

impl VisibilityFallback {
    /// The restricted set to use in place of the failed lookup.
    #[must_use]
    pub fn restricted_set(self) -> FxHashSet<ProductUuid> {
        match self {
            Self::ShowAll => FxHashSet::default(),
        }
    }
}

/// Filter a catalog down to what `viewer` may see.
///
/// * Admins see everything.
/// * A product absent from `restricted` is public.
/// * A restricted product is kept only for authenticated viewers holding
///   one of its edges (`own`).
#[must_use]
pub fn visible_products(
    products: Vec<Product>,
    restricted: &FxHashSet<ProductUuid>,
    own: &FxHashSet<ProductUuid>,
    viewer: Viewer,
) -> Vec<Product> {
    if viewer.is_admin() {
        return products;
    }

    products
        .into_iter()
        .filter(|product| {
            !restricted.contains(&product.uuid)
                || (viewer.is_authenticated() && own.contains(&product.uuid))
        })
        .collect()
}

/// Drop products whose category is not offered as a storefront filter.
///
/// Products with no category at all are always kept.
#[must_use]
pub fn with_active_categories(
    products: Vec<Product>,
    active: &FxHashSet<CategoryUuid>,
) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| {
            product
                .category_uuid
                .is_none_or(|category| active.contains(&category))
        })
        .collect()
}
