//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::{JsonBody, QueryParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::domain::orders::models::{Checkout, ShippingDetails};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::get::OrderResponse},
    state::State,
};

/// Checkout Request
///
/// No total is accepted here; the tax-inclusive total is computed
/// server-side from the cart's captured prices.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// The cart to convert into an order
    pub cart_uuid: Uuid,

    pub shipping_name: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub delivery_notes: Option<String>,
}

impl From<CheckoutRequest> for Checkout {
    fn from(request: CheckoutRequest) -> Self {
        Checkout {
            cart_uuid: request.cart_uuid.into(),
            shipping: ShippingDetails {
                shipping_name: request.shipping_name,
                shipping_address: request.shipping_address,
                billing_address: request.billing_address,
                delivery_notes: request.delivery_notes,
            },
        }
    }
}

/// Checkout Handler
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    lang: QueryParam<String, false>,
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;
    let language = lang.into_language()?;

    let order = state
        .app
        .orders
        .checkout(viewer, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderResponse::resolve(order, language)))
}
