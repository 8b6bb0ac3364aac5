//! # Wishlist Store
//!
//! Saved-for-later products as a persisted, single-owner collection. No quantities:
//! a product is either on the wishlist or not.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Wishlist`]
//! - [`error`] - [`WishlistError`]
//! - [`actions`] - [`WishlistAction`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Wishlist;
use store_framework::{StoreActor, StoreClient};

/// Creates a new wishlist actor and its client.
pub fn new() -> (StoreActor<Wishlist>, StoreClient<Wishlist>) {
    StoreActor::new(32)
}
