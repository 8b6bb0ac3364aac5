//! # Catalog Client
//!
//! Read-only access to the remote product catalog.
//!
//! Callers never see a catalog failure: listings come back empty and lookups come
//! back `None`. The reason is logged at `warn` by the implementation.
//!
//! - [`HttpCatalog`] talks to the catalog's JSON API over HTTP.
//! - [`InMemoryCatalog`] serves a fixed product list (tests, fixtures, offline runs).

pub mod http;
pub mod memory;

pub use http::{CatalogError, HttpCatalog};
pub use memory::InMemoryCatalog;

use crate::model::{Product, ProductId};
use async_trait::async_trait;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every product the catalog offers, in catalog order. Empty on failure.
    async fn list_products(&self) -> Vec<Product>;

    /// One product, `None` when it does not exist or the request failed.
    async fn get_product(&self, id: ProductId) -> Option<Product>;

    /// The category names in use. Empty on failure.
    async fn list_categories(&self) -> Vec<String>;
}
