//! Mutations of the [`Wishlist`](crate::model::Wishlist).

use crate::model::{Product, ProductId};

#[derive(Debug, Clone)]
pub enum WishlistAction {
    /// Saves a product. Ignored when it is already saved.
    Add(Product),
    /// Forgets a product. Ignored when it is not saved.
    Remove(ProductId),
    Clear,
}
