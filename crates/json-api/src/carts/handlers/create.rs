//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartCreatedResponse {
    /// Created cart UUID; the client keeps this as its cart handle
    pub uuid: Uuid,
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .carts
        .create_cart()
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/carts/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartCreatedResponse { uuid: uuid.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrine_app::{auth::Viewer, domain::carts::models::CartUuid};

    use crate::{
        carts::handlers::tests::make_cart,
        test_helpers::{TestApp, service_as},
    };

    use super::*;

    #[tokio::test]
    async fn test_create_cart_returns_201_and_location() -> TestResult {
        let uuid = CartUuid::new();

        let mut app = TestApp::new();

        app.carts
            .expect_create_cart()
            .once()
            .return_once(move || Ok(make_cart(uuid, vec![])));

        let mut res = TestClient::post("http://example.com/carts")
            .send(&service_as(
                app,
                Viewer::Anonymous,
                Router::with_path("carts").post(handler),
            ))
            .await;

        let body: CartCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(location, Some(format!("/carts/{uuid}").as_str()));

        Ok(())
    }
}
