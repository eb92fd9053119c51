//! Assignments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    auth::UserUuid,
    domain::{assignments::models::ProductAssignment, products::models::ProductUuid},
};

const LIST_RESTRICTED_PRODUCTS_SQL: &str = include_str!("sql/list_restricted_products.sql");
const LIST_USER_ASSIGNMENTS_SQL: &str = include_str!("sql/list_user_assignments.sql");
const LIST_PRODUCT_ASSIGNMENTS_SQL: &str = include_str!("sql/list_product_assignments.sql");
const DELETE_PRODUCT_ASSIGNMENTS_SQL: &str = include_str!("sql/delete_product_assignments.sql");
const CREATE_PRODUCT_ASSIGNMENT_SQL: &str = include_str!("sql/create_product_assignment.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAssignmentsRepository;

impl PgAssignmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Every product uuid holding at least one edge. Requires a privileged
    /// transaction; under a viewer transaction the row policy hides other
    /// users' edges and the aggregate would be silently incomplete.
    pub(crate) async fn list_restricted_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductUuid>, sqlx::Error> {
        let uuids: Vec<Uuid> = query_scalar(LIST_RESTRICTED_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(uuids.into_iter().map(Into::into).collect())
    }

    pub(crate) async fn list_user_assignments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<ProductUuid>, sqlx::Error> {
        let uuids: Vec<Uuid> = query_scalar(LIST_USER_ASSIGNMENTS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(uuids.into_iter().map(Into::into).collect())
    }

    pub(crate) async fn list_product_assignments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<ProductAssignment>, sqlx::Error> {
        query_as::<Postgres, ProductAssignment>(LIST_PRODUCT_ASSIGNMENTS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Replace the full edge set for a product: delete everything, then
    /// insert the target membership. Runs inside the caller's transaction.
    pub(crate) async fn replace_product_assignments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        users: &[UserUuid],
    ) -> Result<(), sqlx::Error> {
        query(DELETE_PRODUCT_ASSIGNMENTS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?;

        for user in users {
            query(CREATE_PRODUCT_ASSIGNMENT_SQL)
                .bind(product.into_uuid())
                .bind(user.into_uuid())
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ProductAssignment {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
