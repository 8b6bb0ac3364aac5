//! Typed clients for the two stores.
//!
//! Each client wraps a generic [`StoreClient`](store_framework::StoreClient) and
//! implements [`StoreHandle`](store_framework::StoreHandle) for the raw `snapshot` and
//! `apply` calls, adding one method per domain operation on top.

pub mod cart_client;
pub mod wishlist_client;

pub use cart_client::CartClient;
pub use wishlist_client::WishlistClient;
