//! HTTP implementation of [`Catalog`](super::Catalog).
//!
//! Endpoints, relative to the base URL:
//! - `GET /products`
//! - `GET /products/{id}`
//! - `GET /products/categories`
//!
//! There are no retries and no caching. Each call is one request.

use super::Catalog;
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Why a catalog request produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Catalog returned {status} for {url}")]
    Status { url: String, status: StatusCode },
    #[error("Catalog response from {url} could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `path` and decodes the body.
    ///
    /// `Ok(None)` means the catalog answered but had nothing: a 404, an empty body or
    /// a JSON `null`.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Sending request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<T>>(&body).map_err(|source| CatalogError::Decode { url, source })
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Vec<Product> {
        match self.fetch::<Vec<Product>>("/products").await {
            Ok(products) => products.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Error fetching products");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Option<Product> {
        match self.fetch::<Product>(&format!("/products/{id}")).await {
            Ok(product) => {
                if product.is_none() {
                    debug!("Product not found");
                }
                product
            }
            Err(e) => {
                warn!(error = %e, "Error fetching product");
                None
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Vec<String> {
        match self.fetch::<Vec<String>>("/products/categories").await {
            Ok(categories) => categories.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Error fetching categories");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let catalog = HttpCatalog::new("https://catalog.example.com/");
        assert_eq!(catalog.base_url(), "https://catalog.example.com");
    }

    #[test]
    fn test_status_error_message() {
        let err = CatalogError::Status {
            url: "http://x/products".into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "Catalog returned 500 Internal Server Error for http://x/products"
        );
    }
}
