//! Error types for the wishlist store.

use crate::model::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    /// Stored wishlist data breaks a wishlist invariant and cannot be served.
    #[error("Corrupt wishlist state: product {0} saved more than once")]
    CorruptState(ProductId),

    /// The wishlist store could not be reached.
    #[error("Wishlist store unavailable: {0}")]
    StoreUnavailable(String),
}
