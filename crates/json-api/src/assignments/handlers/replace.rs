//! Replace Product Assignments Handler

use std::sync::Arc;

use rustc_hash::FxHashSet;
use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{
    auth::{Role, UserUuid},
    domain::assignments::without_admins,
};

use crate::{assignments::errors::into_status_error, extensions::*, state::State};

/// Replace Product Assignments Request
///
/// The complete desired member set, not a diff. An empty list makes the
/// product publicly visible again.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReplaceAssignmentsRequest {
    pub users: Vec<Uuid>,
}

/// Replace Product Assignments Handler
///
/// Admin accounts are stripped from the submitted set before storing;
/// admins see every product without holding an edge.
#[endpoint(
    tags("admin"),
    summary = "Replace Product Assignments",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ReplaceAssignmentsRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;

    let admins: FxHashSet<UserUuid> = state
        .app
        .directory
        .list_users()
        .await
        .or_500("failed to list users for admin filtering")?
        .into_iter()
        .filter(|account| account.role == Role::Admin)
        .map(|account| account.uuid)
        .collect();

    let desired: Vec<UserUuid> = json
        .into_inner()
        .users
        .into_iter()
        .map(Into::into)
        .collect();

    state
        .app
        .assignments
        .replace_assignments(
            viewer,
            product.into_inner().into(),
            without_admins(desired, &admins),
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use vitrine_app::{
        auth::UserAccount,
        domain::{assignments::AssignmentsServiceError, products::models::ProductUuid},
    };

    use crate::test_helpers::{TEST_ADMIN, TestApp, service_as};

    use super::*;

    fn account(uuid: UserUuid, role: Role) -> UserAccount {
        UserAccount {
            uuid,
            email: "user@example.com".to_string(),
            role,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(app: TestApp) -> Service {
        service_as(
            app,
            TEST_ADMIN,
            Router::with_path("admin/products/{product}/assignments").put(handler),
        )
    }

    #[tokio::test]
    async fn test_replace_strips_admin_users_before_storing() -> TestResult {
        let product = ProductUuid::new();
        let customer = UserUuid::new();
        let admin = UserUuid::new();

        let mut app = TestApp::new();

        app.directory
            .expect_list_users()
            .once()
            .return_once(move || {
                Ok(vec![
                    account(customer, Role::Customer),
                    account(admin, Role::Admin),
                ])
            });

        app.assignments
            .expect_replace_assignments()
            .once()
            .withf(move |viewer, p, users| {
                *viewer == TEST_ADMIN && *p == product && *users == vec![customer]
            })
            .return_once(|_, _, _| Ok(()));

        let res = TestClient::put(format!(
            "http://example.com/admin/products/{product}/assignments"
        ))
        .json(&json!({ "users": [customer.into_uuid(), admin.into_uuid()] }))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_with_empty_set_clears_all_edges() -> TestResult {
        let product = ProductUuid::new();

        let mut app = TestApp::new();

        app.directory
            .expect_list_users()
            .once()
            .return_once(|| Ok(vec![]));

        app.assignments
            .expect_replace_assignments()
            .once()
            .withf(move |_, p, users| *p == product && users.is_empty())
            .return_once(|_, _, _| Ok(()));

        let res = TestClient::put(format!(
            "http://example.com/admin/products/{product}/assignments"
        ))
        .json(&json!({ "users": [] }))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_unknown_product_returns_404() -> TestResult {
        let product = ProductUuid::new();

        let mut app = TestApp::new();

        app.directory
            .expect_list_users()
            .once()
            .return_once(|| Ok(vec![]));

        app.assignments
            .expect_replace_assignments()
            .once()
            .return_once(|_, _, _| Err(AssignmentsServiceError::UnknownProduct));

        let res = TestClient::put(format!(
            "http://example.com/admin/products/{product}/assignments"
        ))
        .json(&json!({ "users": [] }))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
