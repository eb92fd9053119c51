//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        errors::CategoriesServiceError,
        models::{Category, CategoryUpdate, CategoryUuid, NewCategory},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn list_active_categories(&self) -> Result<Vec<Category>, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_active_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_category(&mut tx, category, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories, including inactive ones.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError>;

    /// Retrieves the categories offered as storefront filters.
    async fn list_active_categories(&self) -> Result<Vec<Category>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(&self, category: CategoryUuid)
    -> Result<Category, CategoriesServiceError>;

    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError>;

    /// Updates a category with the given UUID.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<Category, CategoriesServiceError>;

    /// Deletes a category; products referencing it fall back to "no category".
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::{
            ProductsService,
            models::{NewProduct, ProductUuid},
        },
        i18n::TranslatedText,
        test::{TestContext, helpers::{new_category, new_product}},
    };

    use super::*;

    #[tokio::test]
    async fn create_category_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = CategoryUuid::new();

        let category = ctx
            .categories
            .create_category(NewCategory {
                icon: Some("🧴".to_string()),
                sort_order: 5,
                ..new_category(uuid)
            })
            .await?;

        assert_eq!(category.uuid, uuid);
        assert_eq!(category.icon.as_deref(), Some("🧴"));
        assert_eq!(category.sort_order, 5);
        assert!(category.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn list_active_categories_excludes_inactive() -> TestResult {
        let ctx = TestContext::new().await;

        let active = CategoryUuid::new();
        let inactive = CategoryUuid::new();

        ctx.categories.create_category(new_category(active)).await?;
        ctx.categories
            .create_category(NewCategory {
                is_active: false,
                ..new_category(inactive)
            })
            .await?;

        let categories = ctx.categories.list_active_categories().await?;
        let uuids: Vec<CategoryUuid> = categories.iter().map(|c| c.uuid).collect();

        assert!(uuids.contains(&active), "active category should be listed");
        assert!(
            !uuids.contains(&inactive),
            "inactive category should be excluded"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_categories_orders_by_sort_order() -> TestResult {
        let ctx = TestContext::new().await;

        let last = CategoryUuid::new();
        let first = CategoryUuid::new();

        ctx.categories
            .create_category(NewCategory {
                sort_order: 9,
                ..new_category(last)
            })
            .await?;

        ctx.categories
            .create_category(NewCategory {
                sort_order: 1,
                ..new_category(first)
            })
            .await?;

        let categories = ctx.categories.list_categories().await?;
        let uuids: Vec<CategoryUuid> = categories.iter().map(|c| c.uuid).collect();

        assert_eq!(uuids, vec![first, last]);

        Ok(())
    }

    #[tokio::test]
    async fn update_category_toggles_active_flag() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = CategoryUuid::new();

        ctx.categories.create_category(new_category(uuid)).await?;

        let updated = ctx
            .categories
            .update_category(
                uuid,
                CategoryUpdate {
                    name: TranslatedText::from_form("Cleaning", "Rengjøring"),
                    description: TranslatedText::from_form("", ""),
                    icon: None,
                    is_active: false,
                    sort_order: 0,
                },
            )
            .await?;

        assert!(!updated.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn delete_category_detaches_products() -> TestResult {
        let ctx = TestContext::new().await;
        let category = CategoryUuid::new();
        let product = ProductUuid::new();

        ctx.categories.create_category(new_category(category)).await?;
        ctx.products
            .create_product(NewProduct {
                category_uuid: Some(category),
                ..new_product(product)
            })
            .await?;

        ctx.categories.delete_category(category).await?;

        let detached = ctx.products.get_product(product).await?;

        assert_eq!(detached.category_uuid, None);

        Ok(())
    }

    #[tokio::test]
    async fn delete_category_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.delete_category(CategoryUuid::new()).await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
