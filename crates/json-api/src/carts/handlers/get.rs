//! Get Cart Handler

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

use vitrine_app::{domain::carts::models::Cart, i18n::Language};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// A cart line ready for rendering.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the line
    pub uuid: Uuid,

    /// The product this line holds
    pub product_uuid: Uuid,

    /// Product name in the requested language
    pub name: String,

    /// Unit price captured when the line was added
    pub unit_price: String,

    /// Units of the product in this line
    pub quantity: i32,

    /// Public product image URL
    pub image_url: Option<String>,

    /// Live stock level, for out-of-stock warnings
    pub stock: i32,
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The cart lines, oldest first
    pub lines: Vec<CartLineResponse>,

    /// Exact sum of unit price times quantity
    pub subtotal: String,

    /// Total number of units in the cart
    pub item_count: i64,
}

impl CartResponse {
    pub(crate) fn resolve(cart: Cart, language: Language) -> Self {
        let subtotal = cart.subtotal().to_string();
        let item_count = cart.item_count();

        Self {
            uuid: cart.uuid.into(),
            lines: cart
                .lines
                .into_iter()
                .map(|line| CartLineResponse {
                    uuid: line.uuid.into(),
                    product_uuid: line.product_uuid.into(),
                    name: line.name.resolve(language).to_string(),
                    unit_price: line.unit_price.to_string(),
                    quantity: line.quantity,
                    image_url: line.image_url,
                    stock: line.stock,
                })
                .collect(),
            subtotal,
            item_count,
        }
    }
}

/// Get Cart Handler
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let language = lang.into_language()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::resolve(cart, language)))
}
