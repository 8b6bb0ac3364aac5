//! # StoreHandle Trait
//!
//! Common interface for store-specific clients: default `snapshot` and `apply`
//! methods built on top of a generic [`StoreClient`], with framework errors mapped to
//! the store's own error type.
use crate::{Change, FrameworkError, StoreClient, StoreEntity};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the raw store operations.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use store_framework::{Change, FrameworkError, StoreClient, StoreEntity, StoreHandle};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// struct Notes(Vec<String>);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("notes unavailable: {0}")]
/// struct NotesError(String);
///
/// impl StoreEntity for Notes {
///     const STORAGE_KEY: &'static str = "notes";
///     type Action = String;
///     type Error = NotesError;
///
///     fn handle_action(&mut self, note: String) -> Result<Change, NotesError> {
///         self.0.push(note);
///         Ok(Change::Applied)
///     }
/// }
///
/// struct NotesClient {
///     inner: StoreClient<Notes>,
/// }
///
/// impl StoreHandle<Notes> for NotesClient {
///     type Error = NotesError;
///
///     fn inner(&self) -> &StoreClient<Notes> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NotesError(e.to_string())
///     }
/// }
///
/// async fn usage(client: NotesClient) {
///     // snapshot() and apply() are provided automatically
///     let _ = client.apply("remember the milk".to_string()).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the whole collection.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Run one raw action against the store.
    #[tracing::instrument(skip(self))]
    async fn apply(&self, action: T::Action) -> Result<Change, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().apply(action).await.map_err(Self::map_error)
    }
}
