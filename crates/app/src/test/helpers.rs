//! Fixture builders shared across service tests.

use async_trait::async_trait;
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::models::{CartLine, CartLineUuid},
        categories::models::{CategoryUuid, NewCategory},
        products::models::{NewProduct, Product, ProductUuid},
    },
    i18n::TranslatedText,
    notify::{ContactMessage, Notifier, NotifyError, OrderConfirmation},
};

/// A notifier that delivers nothing, for tests that do not observe email.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn order_confirmation(
        &self,
        _confirmation: &OrderConfirmation,
    ) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn contact_message(&self, _message: &ContactMessage) -> Result<(), NotifyError> {
        Ok(())
    }
}

pub(crate) fn new_product(uuid: ProductUuid) -> NewProduct {
    NewProduct {
        uuid,
        name: TranslatedText::from_form("Test Product", "Testprodukt"),
        description: TranslatedText::from_form("A product under test", ""),
        price: Decimal::new(10000, 2),
        stock: 10,
        category_uuid: None,
        image_url: None,
        document_url: None,
    }
}

pub(crate) fn new_category(uuid: CategoryUuid) -> NewCategory {
    NewCategory {
        uuid,
        name: TranslatedText::from_form("Test Category", "Testkategori"),
        description: TranslatedText::from_form("", ""),
        icon: None,
        is_active: true,
        sort_order: 0,
    }
}

/// An in-memory product row for pure-filter tests.
pub(crate) fn product_fixture(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: TranslatedText::from_form("Fixture", ""),
        description: TranslatedText::from_form("", ""),
        price: Decimal::new(10000, 2),
        stock: 1,
        category_uuid: None,
        image_url: None,
        document_url: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// An in-memory cart line for cart-math tests.
pub(crate) fn cart_line_fixture(unit_price: Decimal, quantity: i32) -> CartLine {
    CartLine {
        uuid: CartLineUuid::new(),
        product_uuid: ProductUuid::new(),
        name: TranslatedText::from_form("Fixture", ""),
        unit_price,
        quantity,
        image_url: None,
        stock: 100,
    }
}
