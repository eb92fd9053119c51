//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{domain::products::models::Product, i18n::Language};

use crate::{extensions::*, products::errors::catalog_into_status_error, state::State};

/// A product as the storefront renders it: bilingual fields already
/// resolved for the requested language.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// The product name in the requested language
    pub name: String,

    /// The product description in the requested language
    pub description: String,

    /// Unit price, tax exclusive
    pub price: String,

    /// Units in stock
    pub stock: i32,

    /// Owning category, if any
    pub category_uuid: Option<Uuid>,

    /// Public product image URL
    pub image_url: Option<String>,

    /// Public technical document URL
    pub document_url: Option<String>,
}

impl ProductResponse {
    pub(crate) fn resolve(product: Product, language: Language) -> Self {
        Self {
            uuid: product.uuid.into(),
            name: product.name.resolve(language).to_string(),
            description: product.description.resolve(language).to_string(),
            price: product.price.to_string(),
            stock: product.stock,
            category_uuid: product.category_uuid.map(Into::into),
            image_url: product.image_url,
            document_url: product.document_url,
        }
    }
}

/// Get Product Handler
///
/// Returns a single product, subject to the viewer's visibility.
#[endpoint(tags("storefront"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;
    let language = lang.into_language()?;

    let product = state
        .app
        .storefront
        .get_visible(viewer, product.into_inner().into())
        .await
        .map_err(catalog_into_status_error)?;

    Ok(Json(ProductResponse::resolve(product, language)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrine_app::{
        auth::Viewer,
        domain::{catalog::CatalogError, products::models::ProductUuid},
    };

    use crate::{
        products::handlers::tests::make_product,
        test_helpers::{TestApp, service_as},
    };

    use super::*;

    fn make_service(app: TestApp) -> Service {
        service_as(
            app,
            Viewer::Anonymous,
            Router::with_path("products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_resolves_requested_language() -> TestResult {
        let uuid = ProductUuid::new();

        let mut app = TestApp::new();

        app.storefront
            .expect_get_visible()
            .once()
            .withf(move |viewer, u| *viewer == Viewer::Anonymous && *u == uuid)
            .return_once(move |_, _| Ok(make_product(uuid)));

        let response: ProductResponse =
            TestClient::get(format!("http://example.com/products/{uuid}?lang=no"))
                .send(&make_service(app))
                .await
                .take_json()
                .await?;

        assert_eq!(response.name, "Rens");
        assert_eq!(response.description, "Universalrens");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_defaults_to_english() -> TestResult {
        let uuid = ProductUuid::new();

        let mut app = TestApp::new();

        app.storefront
            .expect_get_visible()
            .once()
            .return_once(move |_, _| Ok(make_product(uuid)));

        let response: ProductResponse =
            TestClient::get(format!("http://example.com/products/{uuid}"))
                .send(&make_service(app))
                .await
                .take_json()
                .await?;

        assert_eq!(response.name, "Cleaner");
        assert_eq!(response.price, "100.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_hidden_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut app = TestApp::new();

        app.storefront
            .expect_get_visible()
            .once()
            .return_once(|_, _| Err(CatalogError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_bad_language_returns_400() -> TestResult {
        let uuid = ProductUuid::new();

        let mut app = TestApp::new();

        app.storefront.expect_get_visible().never();

        let res = TestClient::get(format!("http://example.com/products/{uuid}?lang=sv"))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
