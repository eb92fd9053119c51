//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{
        AuthProviderClient, AuthProviderConfig, AuthService, ProviderAuthService,
        ProviderUserDirectory, UserDirectory,
    },
    database::{self, Db},
    domain::{
        assignments::{AssignmentsService, PgAssignmentsService},
        carts::{CartsService, PgCartsService},
        catalog::{AppStorefrontService, StorefrontService},
        categories::{CategoriesService, PgCategoriesService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
    notify::{HttpNotifier, Notifier, NotifierConfig},
    storage::{HttpObjectStore, ObjectStore, ObjectStoreConfig},
    translate::{HttpTranslator, Translator, TranslatorConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Endpoints for the external collaborators.
#[derive(Debug, Clone)]
pub struct Upstreams {
    pub auth: AuthProviderConfig,
    pub translator: TranslatorConfig,
    pub notifier: NotifierConfig,
    pub storage: ObjectStoreConfig,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub assignments: Arc<dyn AssignmentsService>,
    pub storefront: Arc<dyn StorefrontService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
    pub directory: Arc<dyn UserDirectory>,
    pub translator: Arc<dyn Translator>,
    pub storage: Arc<dyn ObjectStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Build application context from a database URL and upstream endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        upstreams: Upstreams,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let provider = AuthProviderClient::new(upstreams.auth);
        let notifier: Arc<dyn Notifier> = Arc::new(HttpNotifier::new(upstreams.notifier));

        let products: Arc<dyn ProductsService> = Arc::new(PgProductsService::new(db.clone()));
        let categories: Arc<dyn CategoriesService> = Arc::new(PgCategoriesService::new(db.clone()));
        let assignments: Arc<dyn AssignmentsService> =
            Arc::new(PgAssignmentsService::new(db.clone()));

        let storefront: Arc<dyn StorefrontService> = Arc::new(AppStorefrontService::new(
            Arc::clone(&products),
            Arc::clone(&categories),
            Arc::clone(&assignments),
        ));

        Ok(Self {
            storefront,
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db, Arc::clone(&notifier))),
            auth: Arc::new(ProviderAuthService::new(provider.clone())),
            directory: Arc::new(ProviderUserDirectory::new(provider)),
            translator: Arc::new(HttpTranslator::new(upstreams.translator)),
            storage: Arc::new(HttpObjectStore::new(upstreams.storage)),
            notifier,
            products,
            categories,
            assignments,
        })
    }
}
