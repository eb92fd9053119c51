//! Category Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{domain::categories::models::Category, i18n::Language};

use crate::{extensions::*, state::State};

/// A category as the storefront filter bar renders it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// The category name in the requested language
    pub name: String,

    /// The category description in the requested language
    pub description: String,

    /// Emoji or short code shown next to the name
    pub icon: Option<String>,
}

impl CategoryResponse {
    pub(crate) fn resolve(category: Category, language: Language) -> Self {
        Self {
            uuid: category.uuid.into(),
            name: category.name.resolve(language).to_string(),
            description: category.description.resolve(language).to_string(),
            icon: category.icon,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// The active categories, in sort order
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns the categories offered as storefront filters.
#[endpoint(tags("storefront"), summary = "List Categories")]
pub(crate) async fn handler(
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let language = lang.into_language()?;

    let categories = state
        .app
        .categories
        .list_active_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(CategoriesResponse {
        categories: categories
            .into_iter()
            .map(|category| CategoryResponse::resolve(category, language))
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vitrine_app::{auth::Viewer, domain::categories::models::CategoryUuid};

    use crate::{
        categories::handlers::tests::make_category,
        test_helpers::{TestApp, service_as},
    };

    use super::*;

    fn make_service(app: TestApp) -> Service {
        service_as(
            app,
            Viewer::Anonymous,
            Router::with_path("categories").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_resolves_language() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut app = TestApp::new();

        app.categories
            .expect_list_active_categories()
            .once()
            .return_once(move || Ok(vec![make_category(uuid, true)]));

        app.categories.expect_list_categories().never();

        let response: CategoriesResponse =
            TestClient::get("http://example.com/categories?lang=no")
                .send(&make_service(app))
                .await
                .take_json()
                .await?;

        assert_eq!(response.categories.len(), 1);
        assert_eq!(response.categories[0].name, "Rengjøring");
        assert_eq!(response.categories[0].icon.as_deref(), Some("🧽"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut app = TestApp::new();

        app.categories
            .expect_list_active_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let response: CategoriesResponse = TestClient::get("http://example.com/categories")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert!(response.categories.is_empty());

        Ok(())
    }
}
