//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use vitrine_app::{
    auth::{MockAuthService, MockUserDirectory, Role, UserUuid, Viewer},
    context::AppContext,
    domain::{
        assignments::MockAssignmentsService, carts::MockCartsService,
        catalog::MockStorefrontService, categories::MockCategoriesService,
        orders::MockOrdersService, products::MockProductsService,
    },
    notify::MockNotifier,
    storage::MockObjectStore,
    translate::MockTranslator,
};

use crate::state::State;

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_CUSTOMER: Viewer = Viewer::Authenticated {
    user: TEST_USER_UUID,
    role: Role::Customer,
};

pub(crate) const TEST_ADMIN: Viewer = Viewer::Authenticated {
    user: TEST_USER_UUID,
    role: Role::Admin,
};

/// One mock per service; anything a test does not expect will panic when
/// called, so unset mocks are strict by construction.
pub(crate) struct TestApp {
    pub products: MockProductsService,
    pub categories: MockCategoriesService,
    pub assignments: MockAssignmentsService,
    pub storefront: MockStorefrontService,
    pub carts: MockCartsService,
    pub orders: MockOrdersService,
    pub auth: MockAuthService,
    pub directory: MockUserDirectory,
    pub translator: MockTranslator,
    pub storage: MockObjectStore,
    pub notifier: MockNotifier,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        Self {
            products: MockProductsService::new(),
            categories: MockCategoriesService::new(),
            assignments: MockAssignmentsService::new(),
            storefront: MockStorefrontService::new(),
            carts: MockCartsService::new(),
            orders: MockOrdersService::new(),
            auth: MockAuthService::new(),
            directory: MockUserDirectory::new(),
            translator: MockTranslator::new(),
            storage: MockObjectStore::new(),
            notifier: MockNotifier::new(),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        Arc::new(State::new(AppContext {
            products: Arc::new(self.products),
            categories: Arc::new(self.categories),
            assignments: Arc::new(self.assignments),
            storefront: Arc::new(self.storefront),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            auth: Arc::new(self.auth),
            directory: Arc::new(self.directory),
            translator: Arc::new(self.translator),
            storage: Arc::new(self.storage),
            notifier: Arc::new(self.notifier),
        }))
    }
}

/// Wire a route up with mocked state and a fixed viewer.
pub(crate) fn service_as(app: TestApp, viewer: Viewer, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app.into_state()))
            .hoop(inject(viewer))
            .push(route),
    )
}

/// Wire a route up with mocked state and no viewer middleware at all; used
/// by the auth middleware tests, which install the middleware themselves.
pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    let mut app = TestApp::new();

    app.auth = auth;

    app.into_state()
}
