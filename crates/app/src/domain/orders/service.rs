//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    auth::Viewer,
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Checkout, Order, OrderStatus, OrderUuid, total_with_vat},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
    },
    notify::{Notifier, OrderConfirmation, dispatch_order_confirmation},
};

#[derive(Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    notifier: Arc<dyn Notifier>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            notifier,
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn checkout(&self, viewer: Viewer, checkout: Checkout) -> Result<Order, OrdersServiceError> {
        let user = viewer
            .user_uuid()
            .ok_or(OrdersServiceError::NotAuthenticated)?;

        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let lines = self
            .items_repository
            .get_checkout_lines(&mut tx, checkout.cart_uuid.into_uuid())
            .await?;

        if lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let subtotal: Decimal = lines
            .iter()
            .map(|(_, unit_price, quantity)| *unit_price * Decimal::from(*quantity))
            .sum();

        let draft = Order {
            uuid: OrderUuid::new(),
            user_uuid: user,
            status: OrderStatus::Pending,
            subtotal,
            total: total_with_vat(subtotal),
            shipping: checkout.shipping,
            items: Vec::new(),
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        };

        // Order, items, and cart consumption commit or roll back together.
        let mut order = self.orders_repository.create_order(&mut tx, &draft).await?;

        for (product, unit_price, quantity) in lines {
            self.items_repository
                .create_order_item(&mut tx, order.uuid, product.into(), unit_price, quantity)
                .await?;
        }

        if self
            .items_repository
            .consume_cart(&mut tx, checkout.cart_uuid.into_uuid())
            .await?
            == 0
        {
            return Err(OrdersServiceError::UnknownCart);
        }

        let items = self
            .items_repository
            .get_order_items(&mut tx, order.uuid)
            .await?;

        tx.commit().await?;

        order.items.extend(items);

        dispatch_order_confirmation(
            Arc::clone(&self.notifier),
            OrderConfirmation {
                order_uuid: order.uuid,
                user_uuid: order.user_uuid,
                total: order.total,
                item_count: order.items.iter().map(|i| i64::from(i.quantity)).sum(),
            },
        );

        Ok(order)
    }

    async fn get_order(&self, viewer: Viewer, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let mut found = self.orders_repository.get_order(&mut tx, order).await?;

        let items = self
            .items_repository
            .get_order_items(&mut tx, order)
            .await?;

        tx.commit().await?;

        found.items.extend(items);

        Ok(found)
    }

    async fn list_my_orders(&self, viewer: Viewer) -> Result<Vec<Order>, OrdersServiceError> {
        let user = viewer
            .user_uuid()
            .ok_or(OrdersServiceError::NotAuthenticated)?;

        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let orders = self
            .orders_repository
            .list_orders_for_user(&mut tx, user)
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_all_orders(&self, viewer: Viewer) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        viewer: Viewer,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_viewer_transaction(viewer).await?;

        let updated = self
            .orders_repository
            .update_order_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn a cart into an order: snapshot the lines, compute the
    /// tax-inclusive total server-side, consume the cart, all in one
    /// transaction. A confirmation email is dispatched best-effort after
    /// commit.
    async fn checkout(&self, viewer: Viewer, checkout: Checkout)
    -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order with its items. Row policies hide other
    /// users' orders from non-admins.
    async fn get_order(&self, viewer: Viewer, order: OrderUuid)
    -> Result<Order, OrdersServiceError>;

    /// The viewer's own order history, newest first.
    async fn list_my_orders(&self, viewer: Viewer) -> Result<Vec<Order>, OrdersServiceError>;

    /// Every order, for the back office.
    async fn list_all_orders(&self, viewer: Viewer) -> Result<Vec<Order>, OrdersServiceError>;

    /// Admin-only status transition; the only mutation after creation.
    async fn update_status(
        &self,
        viewer: Viewer,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        auth::{Role, UserUuid},
        domain::{
            carts::{
                CartsService,
                models::{CartUuid, NewCartLine},
            },
            orders::models::ShippingDetails,
            products::{
                ProductsService,
                models::{NewProduct, ProductUuid},
            },
        },
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            shipping_name: "Kari Nordmann".to_string(),
            shipping_address: "Storgata 1, 0155 Oslo".to_string(),
            billing_address: "Storgata 1, 0155 Oslo".to_string(),
            delivery_notes: None,
        }
    }

    fn customer(user: UserUuid) -> Viewer {
        Viewer::Authenticated {
            user,
            role: Role::Customer,
        }
    }

    async fn cart_with_line(
        ctx: &TestContext,
        price: Decimal,
        quantity: i32,
    ) -> crate::domain::carts::models::Cart {
        let product = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                price,
                ..new_product(product)
            })
            .await
            .expect("Failed to seed product");

        let cart = ctx.carts.create_cart().await.expect("Failed to create cart");

        ctx.carts
            .add_item(
                cart.uuid,
                NewCartLine {
                    product_uuid: product,
                    quantity,
                },
            )
            .await
            .expect("Failed to add line")
    }

    #[tokio::test]
    async fn checkout_computes_total_server_side() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let cart = cart_with_line(&ctx, Decimal::new(10000, 2), 2).await;

        let order = ctx
            .orders
            .checkout(
                customer(user),
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        assert_eq!(order.subtotal, Decimal::new(20000, 2));
        // 200.00 * 1.25 = 250.00
        assert_eq!(order.total, Decimal::new(25000, 2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items.first().map(|i| i.quantity), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_consumes_the_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let cart = cart_with_line(&ctx, Decimal::TEN, 1).await;

        ctx.orders
            .checkout(
                customer(user),
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        let result = ctx.carts.get_cart(cart.uuid).await;

        assert!(
            matches!(
                result,
                Err(crate::domain::carts::CartsServiceError::NotFound)
            ),
            "cart should be consumed by checkout, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_empty_cart_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let cart = ctx.carts.create_cart().await?;

        let result = ctx
            .orders
            .checkout(
                customer(UserUuid::new()),
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_requires_authentication() -> TestResult {
        let ctx = TestContext::new().await;

        let cart = cart_with_line(&ctx, Decimal::TEN, 1).await;

        let result = ctx
            .orders
            .checkout(
                Viewer::Anonymous,
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotAuthenticated)),
            "expected NotAuthenticated, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn order_item_snapshot_survives_price_change() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();
        let product = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                price: Decimal::new(5000, 2),
                ..new_product(product)
            })
            .await?;

        let cart = ctx.carts.create_cart().await?;

        ctx.carts
            .add_item(
                cart.uuid,
                NewCartLine {
                    product_uuid: product,
                    quantity: 1,
                },
            )
            .await?;

        let order = ctx
            .orders
            .checkout(
                customer(user),
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        // Reprice the product after purchase.
        let current = ctx.products.get_product(product).await?;

        ctx.products
            .update_product(
                product,
                crate::domain::products::models::ProductUpdate {
                    name: current.name,
                    description: current.description,
                    price: Decimal::new(9900, 2),
                    stock: current.stock,
                    category_uuid: current.category_uuid,
                    image_url: current.image_url,
                    document_url: current.document_url,
                },
            )
            .await?;

        let reloaded = ctx.orders.get_order(customer(user), order.uuid).await?;
        let item = reloaded.items.first().expect("item exists");

        assert_eq!(item.unit_price, Decimal::new(5000, 2), "captured price");
        assert_eq!(
            item.current_price,
            Some(Decimal::new(9900, 2)),
            "live price shown alongside"
        );

        Ok(())
    }

    #[tokio::test]
    async fn users_cannot_read_each_others_orders() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = UserUuid::new();
        let other = UserUuid::new();

        let cart = cart_with_line(&ctx, Decimal::TEN, 1).await;

        let order = ctx
            .orders
            .checkout(
                customer(owner),
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        let result = ctx.orders.get_order(customer(other), order.uuid).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "row policy should hide the order, got {result:?}"
        );

        let as_admin = ctx.orders.get_order(ctx.admin, order.uuid).await?;

        assert_eq!(as_admin.uuid, order.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn list_my_orders_is_scoped_to_the_viewer() -> TestResult {
        let ctx = TestContext::new().await;
        let user_a = UserUuid::new();
        let user_b = UserUuid::new();

        let cart_a = cart_with_line(&ctx, Decimal::TEN, 1).await;
        let cart_b = cart_with_line(&ctx, Decimal::ONE, 1).await;

        ctx.orders
            .checkout(
                customer(user_a),
                Checkout {
                    cart_uuid: cart_a.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        ctx.orders
            .checkout(
                customer(user_b),
                Checkout {
                    cart_uuid: cart_b.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        let mine = ctx.orders.list_my_orders(customer(user_a)).await?;

        assert_eq!(mine.len(), 1);
        assert_eq!(mine.first().map(|o| o.user_uuid), Some(user_a));

        let all = ctx.orders.list_all_orders(ctx.admin).await?;

        assert_eq!(all.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn update_status_transitions_the_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let cart = cart_with_line(&ctx, Decimal::TEN, 1).await;

        let order = ctx
            .orders
            .checkout(
                customer(user),
                Checkout {
                    cart_uuid: cart.uuid,
                    shipping: shipping(),
                },
            )
            .await?;

        let updated = ctx
            .orders
            .update_status(ctx.admin, order.uuid, OrderStatus::Processing)
            .await?;

        assert_eq!(updated.status, OrderStatus::Processing);

        Ok(())
    }
}
