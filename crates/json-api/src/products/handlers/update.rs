//! Update Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{domain::products::models::ProductUpdate, i18n::TranslatedText};

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::admin_index::AdminProductResponse},
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name_en: String,
    #[serde(default)]
    pub name_no: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_no: String,
    pub price: String,
    pub stock: i32,
    pub category_uuid: Option<Uuid>,
    pub image_url: Option<String>,
    pub document_url: Option<String>,
}

impl UpdateProductRequest {
    fn into_update(self, price: Decimal) -> ProductUpdate {
        ProductUpdate {
            name: TranslatedText::from_form(self.name_en, self.name_no),
            description: TranslatedText::from_form(self.description_en, self.description_no),
            price,
            stock: self.stock,
            category_uuid: self.category_uuid.map(Into::into),
            image_url: self.image_url,
            document_url: self.document_url,
        }
    }
}

/// Update Product Handler
#[endpoint(
    tags("admin"),
    summary = "Update Product",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<AdminProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let price = request
        .price
        .parse::<Decimal>()
        .or_400("could not parse price")?;

    let updated = state
        .app
        .products
        .update_product(product.into_inner().into(), request.into_update(price))
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
