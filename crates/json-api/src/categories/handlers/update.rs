//! Update Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{domain::categories::models::CategoryUpdate, i18n::TranslatedText};

use crate::{
    categories::{errors::into_status_error, handlers::admin_index::AdminCategoryResponse},
    extensions::*,
    state::State,
};

/// Update Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCategoryRequest {
    pub name_en: String,
    #[serde(default)]
    pub name_no: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_no: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        CategoryUpdate {
            name: TranslatedText::from_form(request.name_en, request.name_no),
            description: TranslatedText::from_form(request.description_en, request.description_no),
            icon: request.icon,
            is_active: request.is_active,
            sort_order: request.sort_order,
        }
    }
}

/// Update Category Handler
#[endpoint(
    tags("admin"),
    summary = "Update Category",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    json: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<AdminCategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .categories
        .update_category(category.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
