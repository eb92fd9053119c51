//! Set Cart Line Quantity Handler

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

use crate::{
    carts::{errors::into_status_error, handlers::get::CartResponse},
    extensions::*,
    state::State,
};

/// Set Cart Line Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetQuantityRequest {
    /// Desired quantity; values below one are floored to one. Removing a
    /// line is a separate DELETE, never a quantity side effect.
    pub quantity: i32,
}

/// Set Cart Line Quantity Handler
#[endpoint(tags("carts"), summary = "Set Cart Line Quantity")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    line: PathParam<Uuid>,
    lang: QueryParam<String, false>,
    json: JsonBody<SetQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let language = lang.into_language()?;

    let cart = state
        .app
        .carts
        .set_quantity(
            cart.into_inner().into(),
            line.into_inner().into(),
            json.into_inner().quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::resolve(cart, language)))
}
