//! [`StoreEntity`] implementation for the [`Wishlist`], stored under the `wishlist` key.

use super::actions::WishlistAction;
use super::error::WishlistError;
use crate::model::Wishlist;
use store_framework::{Change, StoreEntity};

impl StoreEntity for Wishlist {
    const STORAGE_KEY: &'static str = "wishlist";
    type Action = WishlistAction;
    type Error = WishlistError;

    fn handle_action(&mut self, action: WishlistAction) -> Result<Change, WishlistError> {
        match action {
            WishlistAction::Add(product) => {
                if self.contains(product.id) {
                    return Ok(Change::Ignored);
                }
                self.items.push(product);
                Ok(Change::Applied)
            }
            WishlistAction::Remove(id) => {
                let before = self.items.len();
                self.items.retain(|p| p.id != id);
                Ok(Change::from(self.items.len() != before))
            }
            WishlistAction::Clear => {
                if self.items.is_empty() {
                    return Ok(Change::Ignored);
                }
                self.items.clear();
                Ok(Change::Applied)
            }
        }
    }

    fn on_restore(&mut self) -> Result<(), WishlistError> {
        for (i, product) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|p| p.id == product.id) {
                return Err(WishlistError::CorruptState(product.id));
            }
        }
        Ok(())
    }
}
