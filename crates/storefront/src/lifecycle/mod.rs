//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront.
//!
//! ## The StorefrontSystem Pattern
//!
//! ```rust,ignore
//! // 1. Create stores (no dependencies yet)
//! let (cart_actor, cart_client) = cart_store::new();
//! let (wishlist_actor, wishlist_client) = wishlist_store::new();
//!
//! // 2. Start them with storage injected (late binding)
//! tokio::spawn(cart_actor.run(storage.clone()));
//! tokio::spawn(wishlist_actor.run(storage));
//! ```
//!
//! Storage is handed over in `run`, not in `new`, so the same actor type runs
//! against [`FileStorage`](store_framework::FileStorage) in the binary and
//! [`MemoryStorage`](store_framework::MemoryStorage) in tests.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each store channel
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for both store tasks to finish
//!
//! Persistence is write-through, so there is nothing left to flush at shutdown.

pub mod storefront_system;

pub use storefront_system::*;
