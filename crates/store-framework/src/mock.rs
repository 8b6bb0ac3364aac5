//! # Mock Store & Testing Guide
//!
//! [`MockStore<T>`] hands out a real [`StoreClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running [`StoreActor`](crate::StoreActor).
//! Use it to test client wrappers (argument mapping, result mapping, error mapping)
//! without any state or storage.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | None (expectations) | Real collection + storage |
//! | **Use Case** | Logic *around* the client | The entity itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a broken channel) |
//!
//! For step-by-step assertions on the exact request a client sends, use the lower
//! level [`create_mock_client`] with [`expect_apply`] / [`expect_snapshot`].
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use store_framework::mock::MockStore;
//! use store_framework::{Change, FrameworkError, StoreEntity};
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! struct Flags(Vec<String>);
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("flag error")]
//! struct FlagError;
//!
//! impl StoreEntity for Flags {
//!     const STORAGE_KEY: &'static str = "flags";
//!     type Action = String;
//!     type Error = FlagError;
//!     fn handle_action(&mut self, _: String) -> Result<Change, FlagError> { Ok(Change::Applied) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Flags>::new();
//!     mock.expect_apply().return_ok(Change::Ignored);
//!     mock.expect_snapshot().return_err(FrameworkError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.apply("beta".into()).await.unwrap(), Change::Ignored);
//!     assert!(matches!(client.snapshot().await, Err(FrameworkError::StoreClosed)));
//!
//!     mock.verify();
//! }
//! ```

use crate::{Change, FrameworkError, StoreClient, StoreEntity, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: StoreEntity> {
    Apply {
        response: Result<Change, FrameworkError>,
    },
    Snapshot {
        response: Result<T, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: StoreEntity>(queue: &Queue<T>) -> std::sync::MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(|e| e.into_inner())
}

/// A mock store with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (or arrives when none is left) panics the background task, which
/// surfaces in the test as [`FrameworkError::StoreDropped`].
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                match (request, expectation) {
                    (StoreRequest::Apply { respond_to, .. }, Some(Expectation::Apply { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => panic!("Unexpected request or expectation mismatch: {request:?}"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `apply` request.
    pub fn expect_apply(&mut self) -> ApplyExpectationBuilder<T> {
        ApplyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `apply` expectations.
pub struct ApplyExpectationBuilder<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> ApplyExpectationBuilder<T> {
    pub fn return_ok(self, change: Change) {
        lock(&self.expectations).push_back(Expectation::Apply { response: Ok(change) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Apply {
            response: Err(error),
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, state: T) {
        lock(&self.expectations).push_back(Expectation::Snapshot { response: Ok(state) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull requests with [`expect_apply`] /
/// [`expect_snapshot`], assert on them, and answer through the returned responder.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Returns the next request if it is an `Apply`.
pub async fn expect_apply<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Action, oneshot::Sender<Result<Change, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Apply { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Returns the responder of the next request if it is a `Snapshot`.
pub async fn expect_snapshot<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
