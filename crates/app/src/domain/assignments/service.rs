//! Assignments service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;

use crate::{
    auth::{UserUuid, Viewer},
    database::Db,
    domain::{
        assignments::{
            errors::AssignmentsServiceError, models::ProductAssignment,
            repository::PgAssignmentsRepository,
        },
        products::models::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgAssignmentsService {
    db: Db,
    repository: PgAssignmentsRepository,
}

impl PgAssignmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAssignmentsRepository::new(),
        }
    }
}

#[async_trait]
impl AssignmentsService for PgAssignmentsService {
    async fn restricted_products(
        &self,
    ) -> Result<FxHashSet<ProductUuid>, AssignmentsServiceError> {
        let mut tx = self.db.begin_privileged_transaction().await?;

        let uuids = self.repository.list_restricted_products(&mut tx).await?;

        tx.commit().await?;

        Ok(uuids.into_iter().collect())
    }

    async fn assigned_to_user(
        &self,
        user: UserUuid,
    ) -> Result<FxHashSet<ProductUuid>, AssignmentsServiceError> {
        let viewer = Viewer::Authenticated {
            user,
            role: crate::auth::Role::Customer,
        };

        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let uuids = self.repository.list_user_assignments(&mut tx, user).await?;

        tx.commit().await?;

        Ok(uuids.into_iter().collect())
    }

    async fn assignments_for_product(
        &self,
        viewer: Viewer,
        product: ProductUuid,
    ) -> Result<Vec<ProductAssignment>, AssignmentsServiceError> {
        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let assignments = self
            .repository
            .list_product_assignments(&mut tx, product)
            .await?;

        tx.commit().await?;

        Ok(assignments)
    }

    async fn replace_assignments(
        &self,
        viewer: Viewer,
        product: ProductUuid,
        users: Vec<UserUuid>,
    ) -> Result<(), AssignmentsServiceError> {
        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        self.repository
            .replace_product_assignments(&mut tx, product, &users)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AssignmentsService: Send + Sync {
    /// The set of products carrying at least one visibility edge.
    ///
    /// This is the privileged aggregate: it reads every edge row, not just
    /// the caller's own, and is the one lookup the storefront treats as
    /// fail-open.
    async fn restricted_products(&self)
    -> Result<FxHashSet<ProductUuid>, AssignmentsServiceError>;

    /// The products explicitly assigned to the given user.
    async fn assigned_to_user(
        &self,
        user: UserUuid,
    ) -> Result<FxHashSet<ProductUuid>, AssignmentsServiceError>;

    /// All edges for a product, for the admin editor.
    async fn assignments_for_product(
        &self,
        viewer: Viewer,
        product: ProductUuid,
    ) -> Result<Vec<ProductAssignment>, AssignmentsServiceError>;

    /// Replace the full edge set for a product in one transaction.
    async fn replace_assignments(
        &self,
        viewer: Viewer,
        product: ProductUuid,
        users: Vec<UserUuid>,
    ) -> Result<(), AssignmentsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::ProductsService,
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    #[tokio::test]
    async fn replace_assignments_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ProductUuid::new();
        let user_a = UserUuid::new();
        let user_b = UserUuid::new();

        ctx.products.create_product(new_product(product)).await?;

        ctx.assignments
            .replace_assignments(ctx.admin, product, vec![user_a, user_b])
            .await?;

        let edges = ctx
            .assignments
            .assignments_for_product(ctx.admin, product)
            .await?;

        let users: Vec<UserUuid> = edges.iter().map(|e| e.user_uuid).collect();

        assert_eq!(edges.len(), 2, "expected two edges");
        assert!(users.contains(&user_a));
        assert!(users.contains(&user_b));

        Ok(())
    }

    #[tokio::test]
    async fn replace_assignments_is_wholesale() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ProductUuid::new();
        let user_a = UserUuid::new();
        let user_b = UserUuid::new();

        ctx.products.create_product(new_product(product)).await?;

        ctx.assignments
            .replace_assignments(ctx.admin, product, vec![user_a])
            .await?;

        // The second submission is the complete desired set; user_a is gone.
        ctx.assignments
            .replace_assignments(ctx.admin, product, vec![user_b])
            .await?;

        let edges = ctx
            .assignments
            .assignments_for_product(ctx.admin, product)
            .await?;

        assert_eq!(edges.len(), 1);
        assert_eq!(edges.first().map(|e| e.user_uuid), Some(user_b));

        Ok(())
    }

    #[tokio::test]
    async fn replace_assignments_unknown_product_fails() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .assignments
            .replace_assignments(ctx.admin, ProductUuid::new(), vec![UserUuid::new()])
            .await;

        assert!(
            matches!(result, Err(AssignmentsServiceError::UnknownProduct)),
            "expected UnknownProduct, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn restricted_products_sees_every_users_edges() -> TestResult {
        let ctx = TestContext::new().await;
        let restricted = ProductUuid::new();
        let public = ProductUuid::new();

        ctx.products.create_product(new_product(restricted)).await?;
        ctx.products.create_product(new_product(public)).await?;

        ctx.assignments
            .replace_assignments(ctx.admin, restricted, vec![UserUuid::new()])
            .await?;

        let set = ctx.assignments.restricted_products().await?;

        assert!(set.contains(&restricted));
        assert!(!set.contains(&public));

        Ok(())
    }

    #[tokio::test]
    async fn assigned_to_user_sees_only_own_edges() -> TestResult {
        let ctx = TestContext::new().await;
        let product_a = ProductUuid::new();
        let product_b = ProductUuid::new();
        let user = UserUuid::new();
        let other = UserUuid::new();

        ctx.products.create_product(new_product(product_a)).await?;
        ctx.products.create_product(new_product(product_b)).await?;

        ctx.assignments
            .replace_assignments(ctx.admin, product_a, vec![user])
            .await?;
        ctx.assignments
            .replace_assignments(ctx.admin, product_b, vec![other])
            .await?;

        let own = ctx.assignments.assigned_to_user(user).await?;

        assert!(own.contains(&product_a));
        assert!(
            !own.contains(&product_b),
            "another user's edge must not leak through the row policy"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_product_cascades_its_edges() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ProductUuid::new();

        ctx.products.create_product(new_product(product)).await?;
        ctx.assignments
            .replace_assignments(ctx.admin, product, vec![UserUuid::new()])
            .await?;

        ctx.products.delete_product(product).await?;

        let set = ctx.assignments.restricted_products().await?;

        assert!(!set.contains(&product), "edges should die with the product");

        Ok(())
    }
}
