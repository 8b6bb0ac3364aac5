//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns one persisted
//! collection. It implements the "Server" side of the Actor Model: messages are
//! processed sequentially and the collection is never shared.

use crate::client::StoreClient;
use crate::entity::{Change, StoreEntity};
use crate::error::{FrameworkError, StorageError};
use crate::message::StoreRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single persisted collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the receiver
/// end of the channel. Because only this task ever touches the collection, each
/// action runs to completion before the next one starts and no lock is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the `actor` (server) and `client` (handle).
/// 2.  **Wire**: pass the [`Storage`] backend into `actor.run(storage)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
/// use store_framework::{Change, MemoryStorage, StoreActor, StoreEntity};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// struct Tally(u32);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tally error")]
/// struct TallyError;
///
/// impl StoreEntity for Tally {
///     const STORAGE_KEY: &'static str = "tally";
///     type Action = u32;
///     type Error = TallyError;
///
///     fn handle_action(&mut self, by: u32) -> Result<Change, TallyError> {
///         self.0 += by;
///         Ok(Change::from(by > 0))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let storage = Arc::new(MemoryStorage::new());
///     let (actor, client) = StoreActor::<Tally>::new(10);
///     tokio::spawn(actor.run(storage.clone()));
///
///     assert_eq!(client.apply(2).await.unwrap(), Change::Applied);
///     assert_eq!(client.apply(0).await.unwrap(), Change::Ignored);
///     assert_eq!(client.snapshot().await.unwrap().0, 2);
///     assert_eq!(storage.get("tally").as_deref(), Some("2"));
/// }
/// ```
///
/// # Operations
///
/// * **Startup**: loads [`StoreEntity::STORAGE_KEY`], decodes it and runs
///   [`StoreEntity::on_restore`]. Anything that fails to decode or validate is
///   discarded, the key is removed and the store starts from `Default`.
/// * **Apply**: runs [`StoreEntity::handle_action`]. On [`Change::Applied`] the whole
///   collection is written back before the caller gets its answer. A write failure
///   is logged and otherwise ignored: the in-memory state stays authoritative.
/// * **Snapshot**: returns a clone of the collection.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    state: T,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: T::default(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Restores the collection from `storage`, then processes requests until every
    /// client has been dropped.
    ///
    /// Requests sent before restoration finishes wait in the channel, so no caller
    /// ever observes the pre-restore empty state.
    pub async fn run(mut self, storage: Arc<dyn Storage>) {
        let key = T::STORAGE_KEY;
        info!(store = key, "Store started");

        self.state = restore::<T>(storage.as_ref()).await;
        debug!(store = key, state = ?self.state, "Restored");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Apply { action, respond_to } => {
                    debug!(store = key, ?action, "Apply");
                    let result = self.state.handle_action(action);
                    match &result {
                        Ok(Change::Applied) => {
                            if let Err(e) = persist(&self.state, storage.as_ref()).await {
                                warn!(store = key, error = %e, "Persist failed");
                            }
                            info!(store = key, "Applied");
                        }
                        Ok(Change::Ignored) => debug!(store = key, "Ignored"),
                        Err(e) => warn!(store = key, error = %e, "Action failed"),
                    }
                    let _ = respond_to
                        .send(result.map_err(|e| FrameworkError::EntityError(Box::new(e))));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(store = key, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(store = key, "Shutdown");
    }
}

async fn restore<T: StoreEntity>(storage: &dyn Storage) -> T {
    let key = T::STORAGE_KEY;
    let raw = match storage.load(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(store = key, error = %e, "Load failed, starting empty");
            return T::default();
        }
    };

    let decoded = serde_json::from_str::<T>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|mut state| {
            state.on_restore().map_err(|e| e.to_string())?;
            Ok(state)
        });

    match decoded {
        Ok(state) => state,
        Err(reason) => {
            warn!(store = key, %reason, "Discarding malformed stored state");
            if let Err(e) = storage.remove(key).await {
                warn!(store = key, error = %e, "Failed to remove malformed state");
            }
            T::default()
        }
    }
}

async fn persist<T: StoreEntity>(state: &T, storage: &dyn Storage) -> Result<(), StorageError> {
    let key = T::STORAGE_KEY;
    let raw = serde_json::to_string(state).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.save(key, &raw).await
}
