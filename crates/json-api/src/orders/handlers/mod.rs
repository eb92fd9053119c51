//! Order Handlers

pub(crate) mod admin_index;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update_status;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use vitrine_app::{
        auth::UserUuid,
        domain::{
            orders::models::{Order, OrderItem, OrderItemUuid, OrderStatus, OrderUuid, ShippingDetails},
            products::models::ProductUuid,
        },
        i18n::TranslatedText,
    };

    pub(super) fn make_order(uuid: OrderUuid, user: UserUuid) -> Order {
        Order {
            uuid,
            user_uuid: user,
            status: OrderStatus::Pending,
            subtotal: Decimal::new(20000, 2),
            total: Decimal::new(25000, 2),
            shipping: ShippingDetails {
                shipping_name: "Kari Nordmann".to_string(),
                shipping_address: "Storgata 1, 0155 Oslo".to_string(),
                billing_address: "Storgata 1, 0155 Oslo".to_string(),
                delivery_notes: None,
            },
            items: vec![OrderItem {
                uuid: OrderItemUuid::new(),
                product_uuid: ProductUuid::new(),
                unit_price: Decimal::new(10000, 2),
                quantity: 2,
                product_name: Some(TranslatedText::Localized {
                    en: "Cleaner".to_string(),
                    no: "Rens".to_string(),
                }),
                current_price: Some(Decimal::new(12000, 2)),
            }],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
