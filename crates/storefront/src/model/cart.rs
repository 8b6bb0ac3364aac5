//! The shopping cart collection.
//!
//! A [`Cart`] only changes through the cart store (see
//! [`cart_store`](crate::cart_store)); this module holds the data and the read-side
//! helpers every caller can use on a snapshot.
use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product in the cart together with how many of it.
///
/// Serialized as the product object with an extra `quantity` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Sum of quantities over `lines`, widened so that lines saturated at `u32::MAX`
/// still add up.
pub fn total_quantity(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Cart lines in the order they were first added. At most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub(crate) lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        total_quantity(&self.lines)
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        Cart {
            lines: vec![
                CartLine::new(Product::new(1, "Backpack", 10.0), 2),
                CartLine::new(Product::new(2, "Mug", 2.5), 3),
            ],
        }
    }

    #[test]
    fn test_totals() {
        let cart = cart();
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), 27.5);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(ProductId(2)).map(CartLine::subtotal), Some(7.5));
    }

    #[test]
    fn test_total_items_past_u32_range() {
        let cart = Cart {
            lines: vec![
                CartLine::new(Product::new(1, "Backpack", 10.0), u32::MAX),
                CartLine::new(Product::new(2, "Mug", 2.5), u32::MAX - 1),
                CartLine::new(Product::new(3, "Lamp", 20.0), 2),
            ],
        };
        assert_eq!(cart.total_items(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_persisted_form_is_flat_array() {
        let cart = Cart {
            lines: vec![CartLine::new(Product::new(7, "Lamp", 20.0), 3)],
        };
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value[0]["id"], 7);
        assert_eq!(value[0]["title"], "Lamp");
        assert_eq!(value[0]["quantity"], 3);

        let decoded: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, cart);
    }
}
