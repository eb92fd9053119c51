//! Order Items Repository

use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::{
    domain::{
        orders::models::{OrderItem, OrderItemUuid, OrderUuid},
        products::models::ProductUuid,
    },
    i18n::TranslatedText,
};

const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const GET_CHECKOUT_LINES_SQL: &str = include_str!("../sql/get_checkout_lines.sql");
const CONSUME_CART_SQL: &str = include_str!("../sql/consume_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        query_as::<Postgres, OrderItem>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// The cart lines feeding a checkout, in snapshot form.
    pub(crate) async fn get_checkout_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: uuid::Uuid,
    ) -> Result<Vec<(uuid::Uuid, Decimal, i32)>, sqlx::Error> {
        query_as(GET_CHECKOUT_LINES_SQL)
            .bind(cart)
            .fetch_all(&mut **tx)
            .await
    }

    /// Delete the cart once its lines are captured; cart lines cascade.
    pub(crate) async fn consume_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: uuid::Uuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CONSUME_CART_SQL)
            .bind(cart)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        product: ProductUuid,
        unit_price: Decimal,
        quantity: i32,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_ORDER_ITEM_SQL)
            .bind(OrderItemUuid::new().into_uuid())
            .bind(order.into_uuid())
            .bind(product.into_uuid())
            .bind(unit_price)
            .bind(quantity)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            unit_price: row.try_get("unit_price")?,
            quantity: row.try_get("quantity")?,
            product_name: row
                .try_get::<Option<Json<TranslatedText>>, _>("product_name")?
                .map(|json| json.0),
            current_price: row.try_get("current_price")?,
        })
    }
}
