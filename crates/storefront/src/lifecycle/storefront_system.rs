use crate::cart_store::{self, CartError};
use crate::catalog::Catalog;
use crate::clients::{CartClient, WishlistClient};
use crate::model::{FilterCriteria, Product, ProductId};
use crate::pipeline::apply_filters;
use crate::wishlist_store::{self, WishlistError};
use std::sync::Arc;
use store_framework::{Change, Storage};
use tracing::{debug, error, info, instrument};

/// Errors from route-level operations that touch more than one store.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Wishlist(#[from] WishlistError),
}

#[derive(Debug, thiserror::Error)]
pub enum ShutdownError {
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// What the product page shows: the product and where it already sits.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub in_wishlist: bool,
    /// Quantity of this product in the cart, 0 when absent.
    pub in_cart: u32,
}

/// The running storefront: the catalog plus both stores.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting both store actors and stopping them again
/// - **Dependency Wiring**: handing the shared [`Storage`] to each store
/// - **Routes**: operations that combine the catalog with the stores
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use store_framework::MemoryStorage;
/// use storefront::catalog::InMemoryCatalog;
/// use storefront::lifecycle::StorefrontSystem;
/// use storefront::model::{FilterCriteria, Product};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = InMemoryCatalog::new(vec![Product::new(1, "Mug", 5.0)]);
///     let system = StorefrontSystem::start(Arc::new(catalog), Arc::new(MemoryStorage::new()));
///
///     let listing = system.browse(&FilterCriteria::default()).await;
///     system.cart.add_to_cart(listing[0].clone(), 2).await?;
///     assert_eq!(system.cart.total_items().await?, 2);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct StorefrontSystem {
    pub catalog: Arc<dyn Catalog>,

    /// Client for the cart store
    pub cart: CartClient,

    /// Client for the wishlist store
    pub wishlist: WishlistClient,

    /// Task handles for both store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawns the cart and wishlist actors over `storage`.
    ///
    /// Each actor restores its own key before serving its first request. Must be
    /// called from inside a Tokio runtime.
    pub fn start(catalog: Arc<dyn Catalog>, storage: Arc<dyn Storage>) -> Self {
        // 1. Create stores (no dependencies)
        let (cart_actor, cart_client) = cart_store::new();
        let (wishlist_actor, wishlist_client) = wishlist_store::new();

        // 2. Start them with the shared storage injected
        let cart_handle = tokio::spawn(cart_actor.run(storage.clone()));
        let wishlist_handle = tokio::spawn(wishlist_actor.run(storage));

        Self {
            catalog,
            cart: CartClient::new(cart_client),
            wishlist: WishlistClient::new(wishlist_client),
            handles: vec![cart_handle, wishlist_handle],
        }
    }

    /// The catalog listing after search, category, price and sort are applied.
    #[instrument(skip(self))]
    pub async fn browse(&self, criteria: &FilterCriteria) -> Vec<Product> {
        let products = self.catalog.list_products().await;
        let listing = apply_filters(&products, criteria);
        debug!(total = products.len(), shown = listing.len(), "Listing filtered");
        listing
    }

    pub async fn categories(&self) -> Vec<String> {
        self.catalog.list_categories().await
    }

    /// Looks a product up and reports whether it is on the wishlist or in the cart.
    ///
    /// `Ok(None)` when the catalog has no such product.
    #[instrument(skip(self))]
    pub async fn product_detail(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductDetail>, StorefrontError> {
        let Some(product) = self.catalog.get_product(id).await else {
            return Ok(None);
        };
        let in_wishlist = self.wishlist.is_in_wishlist(id).await?;
        let in_cart = self
            .cart
            .items()
            .await?
            .iter()
            .find(|line| line.id() == id)
            .map_or(0, |line| line.quantity);

        Ok(Some(ProductDetail {
            product,
            in_wishlist,
            in_cart,
        }))
    }

    /// Puts one unit of a saved product into the cart. The wishlist is left as is.
    ///
    /// Ignored when the product is not on the wishlist.
    #[instrument(skip(self))]
    pub async fn add_wishlist_item_to_cart(&self, id: ProductId) -> Result<Change, StorefrontError> {
        let saved = self
            .wishlist
            .items()
            .await?
            .into_iter()
            .find(|product| product.id == id);

        match saved {
            Some(product) => Ok(self.cart.add_to_cart(product, 1).await?),
            None => {
                debug!("Product is not on the wishlist");
                Ok(Change::Ignored)
            }
        }
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the clients closes the store channels; each actor drains what is
    /// queued and exits. Every applied mutation has already been written by then.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both stores shut down cleanly
    /// - `Err(ShutdownError)` if a store task panicked
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down storefront...");

        drop(self.cart);
        drop(self.wishlist);

        // Wait for every store even after a failure, then report the first one
        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                first_failure.get_or_insert(e);
            }
        }

        if let Some(e) = first_failure {
            return Err(ShutdownError::TaskFailed(e));
        }
        info!("Storefront shutdown complete.");
        Ok(())
    }
}
