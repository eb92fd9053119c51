//! Storefront catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::warn;

use crate::{
    auth::Viewer,
    domain::{
        assignments::AssignmentsService,
        catalog::{
            errors::CatalogError,
            visibility::{VisibilityFallback, visible_products, with_active_categories},
        },
        categories::CategoriesService,
        products::{
            ProductsService, ProductsServiceError,
            models::{Product, ProductUuid},
        },
    },
};

/// Composes products, categories, and assignments into the
/// viewer-dependent storefront view.
#[derive(Clone)]
pub struct AppStorefrontService {
    products: Arc<dyn ProductsService>,
    categories: Arc<dyn CategoriesService>,
    assignments: Arc<dyn AssignmentsService>,
}

impl AppStorefrontService {
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsService>,
        categories: Arc<dyn CategoriesService>,
        assignments: Arc<dyn AssignmentsService>,
    ) -> Self {
        Self {
            products,
            categories,
            assignments,
        }
    }

    /// The restricted set, degraded to [`VisibilityFallback::ShowAll`] when
    /// the privileged aggregate cannot be read.
    async fn restricted_or_fallback(&self) -> FxHashSet<ProductUuid> {
        match self.assignments.restricted_products().await {
            Ok(set) => set,
            Err(error) => {
                warn!("visibility lookup failed, showing all products: {error}");

                VisibilityFallback::ShowAll.restricted_set()
            }
        }
    }

    async fn own_assignments(
        &self,
        viewer: Viewer,
    ) -> Result<FxHashSet<ProductUuid>, CatalogError> {
        match viewer.user_uuid() {
            Some(user) => Ok(self.assignments.assigned_to_user(user).await?),
            None => Ok(FxHashSet::default()),
        }
    }
}

#[async_trait]
impl StorefrontService for AppStorefrontService {
    async fn list_visible(&self, viewer: Viewer) -> Result<Vec<Product>, CatalogError> {
        // Products and categories are independent reads.
        let (products, categories) = tokio::join!(
            self.products.list_products(),
            self.categories.list_active_categories(),
        );

        let active = categories?
            .into_iter()
            .map(|category| category.uuid)
            .collect();

        let products = with_active_categories(products?, &active);

        // Admins bypass assignment filtering entirely; no need to load the
        // edge sets for them.
        if viewer.is_admin() {
            return Ok(products);
        }

        let restricted = self.restricted_or_fallback().await;
        let own = self.own_assignments(viewer).await?;

        Ok(visible_products(products, &restricted, &own, viewer))
    }

    async fn get_visible(
        &self,
        viewer: Viewer,
        product: ProductUuid,
    ) -> Result<Product, CatalogError> {
        let found = match self.products.get_product(product).await {
            Ok(found) => found,
            Err(ProductsServiceError::NotFound) => return Err(CatalogError::NotFound),
            Err(error) => return Err(error.into()),
        };

        if viewer.is_admin() {
            return Ok(found);
        }

        let restricted = self.restricted_or_fallback().await;

        if !restricted.contains(&product) {
            return Ok(found);
        }

        let own = self.own_assignments(viewer).await?;

        if viewer.is_authenticated() && own.contains(&product) {
            return Ok(found);
        }

        // Restricted products must be indistinguishable from absent ones.
        Err(CatalogError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait StorefrontService: Send + Sync {
    /// The storefront grid: active-category products the viewer may see.
    async fn list_visible(&self, viewer: Viewer) -> Result<Vec<Product>, CatalogError>;

    /// The product detail page, under the same visibility rules.
    async fn get_visible(
        &self,
        viewer: Viewer,
        product: ProductUuid,
    ) -> Result<Product, CatalogError>;
}
