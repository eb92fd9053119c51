//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::products::models::ProductUuid, i18n::TranslatedText, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLine>;

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub lines: Vec<CartLine>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// Exact sum of `unit_price × quantity` over all lines.
    ///
    /// No rounding happens here; display formatting is the caller's concern.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }
}

/// Cart Line Model
///
/// `unit_price` is captured when the line is added; `name`, `image_url`,
/// and `stock` are joined live from the product at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub uuid: CartLineUuid,
    pub product_uuid: ProductUuid,
    pub name: TranslatedText,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub stock: i32,
}

/// New Cart Line Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub product_uuid: ProductUuid,
    pub quantity: i32,
}

/// Quantities below one are meaningless; removal is a separate operation,
/// never an implicit side effect of an update.
#[must_use]
pub fn clamp_quantity(quantity: i32) -> i32 {
    quantity.max(1)
}

#[cfg(test)]
mod tests {
    use crate::test::helpers::cart_line_fixture;

    use super::*;

    #[test]
    fn subtotal_is_exact_sum_of_price_times_quantity() {
        let cart = Cart {
            uuid: CartUuid::new(),
            lines: vec![
                cart_line_fixture(Decimal::new(3333, 2), 3),
                cart_line_fixture(Decimal::new(1099, 2), 2),
            ],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        // 33.33 * 3 + 10.99 * 2 = 99.99 + 21.98 = 121.97, exactly.
        assert_eq!(cart.subtotal(), Decimal::new(12197, 2));
    }

    #[test]
    fn empty_cart_has_zero_subtotal_and_count() {
        let cart = Cart {
            uuid: CartUuid::new(),
            lines: vec![],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn item_count_sums_quantities() {
        let cart = Cart {
            uuid: CartUuid::new(),
            lines: vec![
                cart_line_fixture(Decimal::ONE, 2),
                cart_line_fixture(Decimal::ONE, 3),
            ],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn clamp_quantity_floors_at_one() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-4), 1);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(7), 7);
    }
}
