//! Mutations of the [`Cart`](crate::model::Cart).
//!
//! Handled by [`StoreEntity::handle_action`](store_framework::StoreEntity::handle_action)
//! in [`entity`](super::entity). Every variant answers with a
//! [`Change`](store_framework::Change); a rejected argument is `Ignored`, not an error.

use crate::model::{Product, ProductId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// Ignored when `quantity` is 0.
    Add { product: Product, quantity: u32 },
    /// Sets the quantity of an existing line.
    ///
    /// Ignored when `quantity` is 0 (the line stays) or the product is not in the cart.
    UpdateQuantity { id: ProductId, quantity: u32 },
    /// Drops the line for this product, if any.
    Remove(ProductId),
    /// Empties the cart.
    Clear,
}
