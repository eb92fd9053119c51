//! Admin Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::{domain::products::models::Product, i18n::Language};

use crate::{extensions::*, state::State};

/// A product as the back office edits it: both languages, raw.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// English product name
    pub name_en: String,

    /// Norwegian product name
    pub name_no: String,

    /// English product description
    pub description_en: String,

    /// Norwegian product description
    pub description_no: String,

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

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for AdminProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into(),
            name_en: product.name.resolve(Language::En).to_string(),
            name_no: product.name.resolve(Language::No).to_string(),
            description_en: product.description.resolve(Language::En).to_string(),
            description_no: product.description.resolve(Language::No).to_string(),
            price: product.price.to_string(),
            stock: product.stock,
            category_uuid: product.category_uuid.map(Into::into),
            image_url: product.image_url,
            document_url: product.document_url,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminProductsResponse {
    /// Every product, unfiltered
    pub products: Vec<AdminProductResponse>,
}

/// Admin Product Index Handler
///
/// Returns every product, regardless of visibility assignments.
#[endpoint(
    tags("admin"),
    summary = "List Products (admin)",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AdminProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(AdminProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
