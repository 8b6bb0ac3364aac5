//! [`StoreEntity`] implementation for the [`Cart`].
//!
//! The cart is stored under the `cart` key as a JSON array of lines. A stored cart
//! with two lines for one product, or a line with quantity 0, is rejected on restore
//! and the store starts empty.

use super::actions::CartAction;
use super::error::CartError;
use crate::model::{Cart, CartLine};
use store_framework::{Change, StoreEntity};

impl StoreEntity for Cart {
    const STORAGE_KEY: &'static str = "cart";
    type Action = CartAction;
    type Error = CartError;

    fn handle_action(&mut self, action: CartAction) -> Result<Change, CartError> {
        match action {
            CartAction::Add { product, quantity } => {
                if quantity < 1 {
                    return Ok(Change::Ignored);
                }
                match self.lines.iter_mut().find(|line| line.id() == product.id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(quantity),
                    None => self.lines.push(CartLine::new(product, quantity)),
                }
                Ok(Change::Applied)
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if quantity < 1 {
                    return Ok(Change::Ignored);
                }
                match self.lines.iter_mut().find(|line| line.id() == id) {
                    Some(line) if line.quantity != quantity => {
                        line.quantity = quantity;
                        Ok(Change::Applied)
                    }
                    _ => Ok(Change::Ignored),
                }
            }
            CartAction::Remove(id) => {
                let before = self.lines.len();
                self.lines.retain(|line| line.id() != id);
                Ok(Change::from(self.lines.len() != before))
            }
            CartAction::Clear => {
                if self.lines.is_empty() {
                    return Ok(Change::Ignored);
                }
                self.lines.clear();
                Ok(Change::Applied)
            }
        }
    }

    fn on_restore(&mut self) -> Result<(), CartError> {
        for (i, line) in self.lines.iter().enumerate() {
            if line.quantity == 0 {
                return Err(CartError::CorruptState(format!(
                    "product {} has quantity 0",
                    line.id()
                )));
            }
            if self.lines[..i].iter().any(|other| other.id() == line.id()) {
                return Err(CartError::DuplicateLine(line.id()));
            }
        }
        Ok(())
    }
}
