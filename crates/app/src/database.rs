//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, query};

use crate::auth::Viewer;

/// SQL used to set the viewer context for row-level security.
pub const SET_VIEWER_CONTEXT_SQL: &str =
    "SELECT set_config('app.current_user_uuid', $1, true), set_config('app.is_admin', $2, true)";

/// SQL used to mark a transaction as privileged, bypassing the per-row
/// assignment policy for the restricted-set aggregate.
pub const SET_PRIVILEGED_CONTEXT_SQL: &str =
    "SELECT set_config('app.privileged', 'on', true)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction with no viewer context.
    ///
    /// Suitable for tables without row policies (catalog, carts).
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction and set the viewer context for RLS policies.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the viewer
    /// context fails.
    pub async fn begin_viewer_transaction(
        &self,
        viewer: Viewer,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let user = viewer
            .user_uuid()
            .map(|uuid| uuid.to_string())
            .unwrap_or_default();

        let is_admin = if viewer.is_admin() { "on" } else { "off" };

        query(SET_VIEWER_CONTEXT_SQL)
            .bind(user)
            .bind(is_admin)
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }

    /// Begin a privileged transaction that may read every assignment row.
    ///
    /// Used only by the restricted-set aggregate; a viewer transaction is
    /// limited to the viewer's own assignment rows.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the
    /// privileged context fails.
    pub async fn begin_privileged_transaction(
        &self,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_PRIVILEGED_CONTEXT_SQL).execute(&mut *tx).await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}
