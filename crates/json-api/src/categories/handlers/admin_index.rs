//! Admin Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{domain::categories::models::Category, i18n::Language};

use crate::{extensions::*, state::State};

/// A category as the back office edits it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminCategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// English category name
    pub name_en: String,

    /// Norwegian category name
    pub name_no: String,

    /// English category description
    pub description_en: String,

    /// Norwegian category description
    pub description_no: String,

    /// Emoji or short code shown next to the name
    pub icon: Option<String>,

    /// Whether the category is offered as a storefront filter
    pub is_active: bool,

    /// Position in the filter bar
    pub sort_order: i32,

    /// The date and time the category was created
    pub created_at: String,

    /// The date and time the category was last updated
    pub updated_at: String,
}

impl From<Category> for AdminCategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            uuid: category.uuid.into(),
            name_en: category.name.resolve(Language::En).to_string(),
            name_no: category.name.resolve(Language::No).to_string(),
            description_en: category.description.resolve(Language::En).to_string(),
            description_no: category.description.resolve(Language::No).to_string(),
            icon: category.icon,
            is_active: category.is_active,
            sort_order: category.sort_order,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminCategoriesResponse {
    /// Every category, including inactive ones
    pub categories: Vec<AdminCategoryResponse>,
}

/// Admin Category Index Handler
#[endpoint(
    tags("admin"),
    summary = "List Categories (admin)",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<AdminCategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(AdminCategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}
