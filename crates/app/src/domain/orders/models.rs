//! Order Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    auth::UserUuid,
    domain::{carts::models::CartUuid, products::models::ProductUuid},
    i18n::TranslatedText,
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// The order lifecycle. Status is the only field mutated after creation,
/// and only by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub status: OrderStatus,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub shipping: ShippingDetails,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Shipping Details
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingDetails {
    pub shipping_name: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub delivery_notes: Option<String>,
}

/// Order Item Model
///
/// `unit_price` and `quantity` are the snapshot captured at purchase time.
/// `product_name` and `current_price` are joined live for display and are
/// absent when the product has since been deleted; historical orders may
/// therefore show a product's current name next to the captured price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub product_name: Option<TranslatedText>,
    pub current_price: Option<Decimal>,
}

/// Checkout Model
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub cart_uuid: CartUuid,
    pub shipping: ShippingDetails,
}

/// Tax-inclusive order total: the subtotal plus a flat 25% VAT, rounded to
/// two decimal places. Computed here, never accepted from a client.
#[must_use]
pub fn total_with_vat(subtotal: Decimal) -> Decimal {
    (subtotal * Decimal::new(125, 2)).round_dp(2)
}
