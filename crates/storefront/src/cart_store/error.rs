//! Error types for the cart store.

use crate::model::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Stored cart data breaks a cart invariant and cannot be served.
    #[error("Corrupt cart state: {0}")]
    CorruptState(String),

    /// The same product appears on two lines of a stored cart.
    #[error("Duplicate cart line for product {0}")]
    DuplicateLine(ProductId),

    /// The cart store could not be reached.
    #[error("Cart store unavailable: {0}")]
    StoreUnavailable(String),
}
