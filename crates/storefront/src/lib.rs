//! # Storefront
//!
//! A terminal storefront over a remote product catalog, with a cart and a wishlist
//! that survive restarts.
//!
//! ## Core Components
//!
//! - **[catalog]**: read-only catalog access; failures become empty results
//! - **[pipeline]**: search, category, price and sort over a product listing
//! - **[cart_store]** / **[wishlist_store]**: the two persisted collections, each owned
//!   by a [`StoreActor`](store_framework::StoreActor)
//! - **[clients]**: typed handles ([`CartClient`](clients::CartClient),
//!   [`WishlistClient`](clients::WishlistClient)) hiding the message passing
//! - **[lifecycle]**: [`StorefrontSystem`](lifecycle::StorefrontSystem) starts, wires
//!   and stops everything
//! - **[view]**: text rendering of each page
//!
//! ## Testing
//!
//! See [`store_framework::mock`] for utilities to test clients without spawning stores.

pub mod cart_store;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod pipeline;
pub mod view;
pub mod wishlist_store;
