//! # Wishlist Client
//!
//! High-level API for the wishlist store, wrapping a `StoreClient<Wishlist>`.
use crate::model::{Product, ProductId, Wishlist};
use crate::wishlist_store::{WishlistAction, WishlistError};
use async_trait::async_trait;
use store_framework::{Change, FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the wishlist store.
#[derive(Clone)]
pub struct WishlistClient {
    inner: StoreClient<Wishlist>,
}

impl WishlistClient {
    pub fn new(inner: StoreClient<Wishlist>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Wishlist> for WishlistClient {
    type Error = WishlistError;

    fn inner(&self) -> &StoreClient<Wishlist> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        WishlistError::StoreUnavailable(e.to_string())
    }
}

impl WishlistClient {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_wishlist(&self, product: Product) -> Result<Change, WishlistError> {
        debug!("Sending request");
        self.apply(WishlistAction::Add(product)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_wishlist(&self, id: ProductId) -> Result<Change, WishlistError> {
        debug!("Sending request");
        self.apply(WishlistAction::Remove(id)).await
    }

    /// Removes the product when saved, saves it otherwise.
    ///
    /// Returns whether the product is on the wishlist afterwards, read from the
    /// outcome of the mutation this call made rather than from a later snapshot.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn toggle_wishlist(&self, product: Product) -> Result<bool, WishlistError> {
        debug!("Sending request");
        let id = product.id;
        if self.apply(WishlistAction::Add(product)).await?.is_applied() {
            return Ok(true);
        }
        // Already saved. Absent afterwards whether or not this removal wins.
        self.apply(WishlistAction::Remove(id)).await?;
        Ok(false)
    }

    #[instrument(skip(self))]
    pub async fn clear_wishlist(&self) -> Result<Change, WishlistError> {
        debug!("Sending request");
        self.apply(WishlistAction::Clear).await
    }

    pub async fn is_in_wishlist(&self, id: ProductId) -> Result<bool, WishlistError> {
        Ok(self.snapshot().await?.contains(id))
    }

    /// Saved products in the order they were saved.
    pub async fn items(&self) -> Result<Vec<Product>, WishlistError> {
        Ok(self.snapshot().await?.items)
    }

    pub async fn total_items(&self) -> Result<usize, WishlistError> {
        Ok(self.snapshot().await?.total_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::mock::{create_mock_client, expect_apply, MockStore};

    #[tokio::test]
    async fn test_toggle_saves_unsaved_product() {
        let (client, mut receiver) = create_mock_client::<Wishlist>(10);
        let wishlist_client = WishlistClient::new(client);

        let toggle_task = tokio::spawn(async move {
            wishlist_client
                .toggle_wishlist(Product::new(5, "Ring", 9.99))
                .await
        });

        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(action, WishlistAction::Add(ref p) if p.id == ProductId(5)));
        responder.send(Ok(Change::Applied)).unwrap();

        assert!(toggle_task.await.unwrap().unwrap());
        // Membership comes from the Add outcome, no follow-up read
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_toggle_removes_saved_product() {
        let mut mock = MockStore::<Wishlist>::new();
        mock.expect_apply().return_ok(Change::Ignored);
        mock.expect_apply().return_ok(Change::Applied);

        let wishlist_client = WishlistClient::new(mock.client());
        let saved = wishlist_client
            .toggle_wishlist(Product::new(5, "Ring", 9.99))
            .await
            .unwrap();
        assert!(!saved);

        mock.verify();
    }

    #[tokio::test]
    async fn test_toggle_reports_removal_when_another_client_removed_first() {
        // The Add finds the product saved, then a concurrent removal wins the race
        let mut mock = MockStore::<Wishlist>::new();
        mock.expect_apply().return_ok(Change::Ignored);
        mock.expect_apply().return_ok(Change::Ignored);

        let wishlist_client = WishlistClient::new(mock.client());
        assert!(!wishlist_client
            .toggle_wishlist(Product::new(5, "Ring", 9.99))
            .await
            .unwrap());

        mock.verify();
    }

    #[tokio::test]
    async fn test_is_in_wishlist() {
        let mut state = Wishlist::default();
        state.items.push(Product::new(5, "Ring", 9.99));

        let mut mock = MockStore::<Wishlist>::new();
        mock.expect_snapshot().return_ok(state.clone());
        mock.expect_snapshot().return_ok(state);

        let wishlist_client = WishlistClient::new(mock.client());
        assert!(wishlist_client.is_in_wishlist(ProductId(5)).await.unwrap());
        assert!(!wishlist_client.is_in_wishlist(ProductId(6)).await.unwrap());

        mock.verify();
    }

    #[tokio::test]
    async fn test_remove_sends_remove_action() {
        let (client, mut receiver) = create_mock_client::<Wishlist>(10);
        let wishlist_client = WishlistClient::new(client);

        let remove_task =
            tokio::spawn(async move { wishlist_client.remove_from_wishlist(ProductId(5)).await });

        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(action, WishlistAction::Remove(ProductId(5))));
        responder.send(Ok(Change::Applied)).unwrap();

        assert_eq!(remove_task.await.unwrap().unwrap(), Change::Applied);
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_store_unavailable() {
        let mut mock = MockStore::<Wishlist>::new();
        mock.expect_snapshot()
            .return_err(FrameworkError::StoreClosed);

        let wishlist_client = WishlistClient::new(mock.client());
        let result = wishlist_client.total_items().await;
        assert_eq!(
            result,
            Err(WishlistError::StoreUnavailable("Store closed".to_string()))
        );
    }
}
