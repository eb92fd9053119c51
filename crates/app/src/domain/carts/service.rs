//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        models::{Cart, CartLineUuid, CartUuid, NewCartLine, clamp_quantity},
        repositories::{PgCartLinesRepository, PgCartsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    lines_repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
        }
    }

    async fn load_cart(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        cart: CartUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut loaded = self.carts_repository.get_cart(tx, cart).await?;

        let lines = self.lines_repository.get_cart_lines(tx, cart).await?;

        loaded.lines.extend(lines);

        Ok(loaded)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn create_cart(&self) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .carts_repository
            .create_cart(&mut tx, CartUuid::new())
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.carts_repository.delete_cart(&mut tx, cart).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn add_item(&self, cart: CartUuid, line: NewCartLine) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if self.carts_repository.touch_cart(&mut tx, cart).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        let unit_price = self
            .lines_repository
            .get_product_price(&mut tx, line.product_uuid)
            .await?
            .ok_or(CartsServiceError::UnknownProduct)?;

        // Quantities merge without any stock ceiling; the storefront warns
        // but never blocks.
        self.lines_repository
            .upsert_cart_line(
                &mut tx,
                cart,
                line.product_uuid,
                unit_price,
                clamp_quantity(line.quantity),
            )
            .await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn set_quantity(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
        quantity: i32,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .lines_repository
            .set_cart_line_quantity(&mut tx, cart, line, clamp_quantity(quantity))
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::LineNotFound);
        }

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .lines_repository
            .delete_cart_line(&mut tx, cart, line)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::LineNotFound);
        }

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn clear(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if self.carts_repository.touch_cart(&mut tx, cart).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        self.lines_repository.clear_cart_lines(&mut tx, cart).await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a new, empty cart.
    async fn create_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Retrieve a cart with its lines.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Deletes a cart and its lines.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;

    /// Add a product to the cart, merging with an existing line for the
    /// same product by summing quantities.
    async fn add_item(&self, cart: CartUuid, line: NewCartLine) -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity (floored at one).
    async fn set_quantity(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
        quantity: i32,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a single line.
    async fn remove_item(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove every line, keeping the cart itself.
    async fn clear(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;
}
