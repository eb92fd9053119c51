//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, handlers::get::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(tags("carts"), summary = "Remove Cart Item")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    line: PathParam<Uuid>,
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let language = lang.into_language()?;

    let cart = state
        .app
        .carts
        .remove_item(cart.into_inner().into(), line.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::resolve(cart, language)))
}
