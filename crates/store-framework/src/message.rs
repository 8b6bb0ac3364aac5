//! # Store Messages
//!
//! The message types exchanged between a `StoreClient` and its `StoreActor`.

use crate::entity::{Change, StoreEntity};
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a store actor.
///
/// A store owns exactly one collection, so there is no id to route on: every
/// request addresses the whole collection.
///
/// - **Apply**: run one [`StoreEntity::Action`] and persist the result if it changed
///   anything.
/// - **Snapshot**: read a clone of the current collection. Derived values (totals,
///   membership) are computed from snapshots, so they are never cached across
///   mutations.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Apply {
        action: T::Action,
        respond_to: Response<Change>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}
