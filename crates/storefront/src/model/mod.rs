//! Domain data: catalog products, the two persisted collections and listing criteria.

pub mod cart;
pub mod filter;
pub mod product;
pub mod wishlist;

pub use cart::{total_quantity, Cart, CartLine};
pub use filter::{CategoryFilter, FilterCriteria, ParseSortModeError, PriceRange, SortMode};
pub use product::{Product, ProductId, Rating};
pub use wishlist::Wishlist;
