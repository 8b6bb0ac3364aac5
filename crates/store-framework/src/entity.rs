//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract a persisted collection (a cart, a
//! wishlist, …) must implement to be owned by the generic [`StoreActor`](crate::StoreActor).
//! It names the storage key the collection lives under, the actions that mutate it and
//! the error type those actions (and restoration) can fail with.
//!
//! # Architecture Note
//! The actor only knows how to *sequence* actions, *persist* state and *restore* it.
//! Everything the collection means lives in [`StoreEntity::handle_action`], so the same
//! loop serves every store in the application.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_restore`] validates a collection decoded from storage. The
//!   default accepts anything that decoded.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Outcome of a single store action.
///
/// Rejected arguments and no-op requests are not errors: they are reported as
/// [`Change::Ignored`] and nothing is written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// The collection changed and the new state was handed to storage.
    Applied,
    /// The action was rejected or had nothing to do.
    Ignored,
}

impl Change {
    pub fn is_applied(self) -> bool {
        matches!(self, Change::Applied)
    }
}

impl From<bool> for Change {
    fn from(changed: bool) -> Self {
        if changed {
            Change::Applied
        } else {
            Change::Ignored
        }
    }
}

/// Trait that any persisted collection must implement to be managed by `StoreActor`.
///
/// # Persistence
/// The whole value is serialized with `serde_json` under [`StoreEntity::STORAGE_KEY`]
/// after every [`Change::Applied`] action, and decoded from the same key when the
/// actor starts. `Default` is the state of a fresh (or reset) store.
pub trait StoreEntity:
    Clone + Default + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Key the serialized collection is stored under.
    const STORAGE_KEY: &'static str;

    /// Enum of the mutations this collection supports (e.g. `Add`, `Remove`, `Clear`).
    type Action: Send + Sync + Debug;

    /// The error type for this collection.
    ///
    /// One enum per store, shared by every action and by restoration.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies one action to the collection.
    ///
    /// Implementations must leave `self` untouched when they return
    /// `Ok(Change::Ignored)` or an error.
    fn handle_action(&mut self, action: Self::Action) -> Result<Change, Self::Error>;

    /// Called once on a collection decoded from storage, before it is served.
    ///
    /// Returning an error makes the actor discard the stored value and start from
    /// `Default`.
    fn on_restore(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
