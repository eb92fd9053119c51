//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{
    domain::products::models::{NewProduct, ProductUuid},
    i18n::TranslatedText,
};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Create Product Request
///
/// Bilingual fields follow the admin form convention: a blank Norwegian
/// entry is auto-filled with the English text at save time.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
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

impl CreateProductRequest {
    fn into_new_product(self, price: Decimal) -> NewProduct {
        NewProduct {
            uuid: ProductUuid::new(),
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

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product UUID
    pub uuid: Uuid,
}

/// Create Product Handler
#[endpoint(
    tags("admin"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let price = request
        .price
        .parse::<Decimal>()
        .or_400("could not parse price")?;

    let uuid = state
        .app
        .products
        .create_product(request.into_new_product(price))
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/admin/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse { uuid: uuid.into() }))
}
