//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::domain::carts::models::NewCartLine;

use crate::{
    carts::{errors::into_status_error, handlers::get::CartResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,

    /// Units to add; merged into any existing line for the same product
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// Add Cart Item Handler
///
/// Adding the same product again sums quantities into a single line.
#[endpoint(tags("carts"), summary = "Add Cart Item")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    lang: QueryParam<String, false>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let language = lang.into_language()?;

    let request = json.into_inner();

    let cart = state
        .app
        .carts
        .add_item(
            cart.into_inner().into(),
            NewCartLine {
                product_uuid: request.product_uuid.into(),
                quantity: request.quantity,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::resolve(cart, language)))
}
