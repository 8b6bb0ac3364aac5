//! # Cart Store
//!
//! The shopping cart as a persisted, single-owner collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`], one variant per cart mutation
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use store_framework::MemoryStorage;
//! use storefront::cart_store;
//! use storefront::clients::CartClient;
//! use storefront::model::Product;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_store::new();
//!     let cart = CartClient::new(generic_client);
//!     tokio::spawn(actor.run(Arc::new(MemoryStorage::new())));
//!
//!     cart.add_to_cart(Product::new(7, "Lamp", 20.0), 3).await?;
//!     assert_eq!(cart.total_items().await?, 3);
//!     assert_eq!(cart.total_price().await?, 60.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Rules
//!
//! - One line per product; adding a product already in the cart raises its quantity
//! - Quantities are at least 1; anything lower is ignored
//! - Totals are always computed from the lines, never stored

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Cart;
use store_framework::{StoreActor, StoreClient};

/// Creates a new cart actor and its client.
pub fn new() -> (StoreActor<Cart>, StoreClient<Cart>) {
    StoreActor::new(32)
}
