//! # Cart Client
//!
//! Provides a high-level API for the cart store. It wraps a `StoreClient<Cart>` and
//! exposes one method per cart operation.
use crate::cart_store::{CartAction, CartError};
use crate::model::{Cart, CartLine, Product, ProductId};
use async_trait::async_trait;
use store_framework::{Change, FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::StoreUnavailable(e.to_string())
    }
}

impl CartClient {
    /// Adds `quantity` units of `product`. A quantity of 0 is ignored.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product, quantity: u32) -> Result<Change, CartError> {
        debug!("Adding {} units", quantity);
        self.apply(CartAction::Add { product, quantity }).await
    }

    /// Sets the quantity of a line already in the cart.
    ///
    /// Ignored when `quantity` is 0 or the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ProductId, quantity: u32) -> Result<Change, CartError> {
        debug!("Sending request");
        self.apply(CartAction::UpdateQuantity { id, quantity }).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<Change, CartError> {
        debug!("Sending request");
        self.apply(CartAction::Remove(id)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<Change, CartError> {
        debug!("Sending request");
        self.apply(CartAction::Clear).await
    }

    /// The cart lines in insertion order.
    pub async fn items(&self) -> Result<Vec<CartLine>, CartError> {
        Ok(self.snapshot().await?.lines)
    }

    pub async fn total_items(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_items())
    }

    pub async fn total_price(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.total_price())
    }
}
