//! # Store Framework
//!
//! Building blocks for small, persisted, single-owner collections: a shopping cart,
//! a wishlist, a set of saved searches. Each collection is owned by one
//! [`StoreActor`] running in its own Tokio task and is reachable only through a
//! cloneable [`StoreClient`]. Every mutation that changes the collection is written
//! through to a [`Storage`] backend before the caller gets its answer.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - what the collection is and how actions change it
//! 2. **Runtime Layer** ([`StoreActor`]) - sequencing, restore on start, write-through
//! 3. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - type-safe requests
//! 4. **Storage Layer** ([`Storage`]) - [`FileStorage`] in production, [`MemoryStorage`] in tests
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are processed **sequentially**: an action runs to completion, including
//!   its write to storage, before the next request is looked at
//! - No other code holds a reference to the collection; reads get a clone
//!
//! ## Failure Model
//!
//! - A stored value that fails to decode or validate is discarded and the store
//!   starts empty
//! - A failed write is logged; the in-memory collection stays authoritative
//! - Rejected actions are reported as [`Change::Ignored`], not as errors
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockStore<T>`, which answers a real `StoreClient<T>`
//! from a queue of expectations. See its docs for the available patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use entity::{Change, StoreEntity};
pub use error::{FrameworkError, StorageError};
pub use message::{Response, StoreRequest};
pub use storage::{FileStorage, MemoryStorage, Storage};
