//! Get Order Handler

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

use vitrine_app::{domain::orders::models::Order, i18n::Language};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// An order item for display.
///
/// `unit_price` is the price captured at purchase; `name` and
/// `current_price` are joined live and absent when the product is gone.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the item
    pub uuid: Uuid,

    /// The product this item snapshotted
    pub product_uuid: Uuid,

    /// The product's current name, if it still exists
    pub name: Option<String>,

    /// Unit price captured at purchase time
    pub unit_price: String,

    /// Units purchased
    pub quantity: i32,

    /// The product's current price, if it still exists
    pub current_price: Option<String>,
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The purchasing user
    pub user_uuid: Uuid,

    /// Order lifecycle status
    pub status: String,

    /// Sum of captured prices times quantities
    pub subtotal: String,

    /// Tax-inclusive total (subtotal plus 25% VAT)
    pub total: String,

    /// Recipient name
    pub shipping_name: String,

    /// Shipping address
    pub shipping_address: String,

    /// Billing address
    pub billing_address: String,

    /// Courier instructions
    pub delivery_notes: Option<String>,

    /// The order items
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl OrderResponse {
    pub(crate) fn resolve(order: Order, language: Language) -> Self {
        Self {
            uuid: order.uuid.into(),
            user_uuid: order.user_uuid.into(),
            status: order.status.to_string(),
            subtotal: order.subtotal.to_string(),
            total: order.total.to_string(),
            shipping_name: order.shipping.shipping_name,
            shipping_address: order.shipping.shipping_address,
            billing_address: order.shipping.billing_address,
            delivery_notes: order.shipping.delivery_notes,
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    uuid: item.uuid.into(),
                    product_uuid: item.product_uuid.into(),
                    name: item
                        .product_name
                        .map(|name| name.resolve(language).to_string()),
                    unit_price: item.unit_price.to_string(),
                    quantity: item.quantity,
                    current_price: item.current_price.map(|price| price.to_string()),
                })
                .collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Owners see their own orders; admins see all of them.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;
    let language = lang.into_language()?;

    let order = state
        .app
        .orders
        .get_order(viewer, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderResponse::resolve(order, language)))
}
