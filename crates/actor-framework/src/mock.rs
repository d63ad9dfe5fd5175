//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of a store. Every request that arrives is
//! also recorded with its payload, so a test can assert exactly what a client wrapper
//! sent (which ids, in which order, how many round trips).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real store |
//! | **Call inspection** | Every request recorded | Observe state only |
//! | **Error Injection** | `return_err` | Requires arranging state |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::{MockClient, RecordedRequest};
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug)] enum ItemAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Action = ItemAction; type ActionResult = (); type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u32, _: ItemCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: ItemAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//!     let requests = mock.take_requests();
//!     assert!(matches!(requests[1], RecordedRequest::Get { id: 2 }));
//! }
//! ```
//!
//! For lower-level control, [`create_mock_client`] returns a client together with the raw
//! request receiver.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATIONS
// =============================================================================

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    GetMany {
        response: Result<Vec<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    ActionMany {
        response: Result<Vec<T::ActionResult>, FrameworkError>,
    },
}

/// A request received by the mock, with its payload.
pub enum RecordedRequest<T: ActorEntity> {
    Create { params: T::Create },
    Get { id: T::Id },
    GetMany { ids: Vec<T::Id> },
    List,
    Update { id: T::Id, update: T::Update },
    Delete { id: T::Id },
    Action { id: T::Id, action: T::Action },
    ActionMany { actions: Vec<(T::Id, T::Action)> },
}

impl<T: ActorEntity> std::fmt::Debug for RecordedRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordedRequest::Create { params } => write!(f, "Create({:?})", params),
            RecordedRequest::Get { id } => write!(f, "Get({})", id),
            RecordedRequest::GetMany { ids } => write!(f, "GetMany({:?})", ids),
            RecordedRequest::List => write!(f, "List"),
            RecordedRequest::Update { id, update } => write!(f, "Update({}, {:?})", id, update),
            RecordedRequest::Delete { id } => write!(f, "Delete({})", id),
            RecordedRequest::Action { id, action } => write!(f, "Action({}, {:?})", id, action),
            RecordedRequest::ActionMany { actions } => write!(f, "ActionMany({:?})", actions),
        }
    }
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    requests: Vec<RecordedRequest<T>>,
    mismatches: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

/// A mock client with expectation tracking and request recording.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            requests: Vec::new(),
            mismatches: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = task_state.lock().unwrap();
                let expectation = state.expectations.pop_front();
                // Unmatched requests get their reply channel dropped, which surfaces
                // as `ActorDropped` at the caller and as a failure in `verify`.
                let recorded = match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                        RecordedRequest::Get { id }
                    }
                    (
                        ResourceRequest::GetMany { ids, respond_to },
                        Some(Expectation::GetMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        RecordedRequest::GetMany { ids }
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        RecordedRequest::List
                    }
                    (
                        ResourceRequest::Create { params, respond_to },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        RecordedRequest::Create { params }
                    }
                    (
                        ResourceRequest::Action {
                            id,
                            action,
                            respond_to,
                        },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                        RecordedRequest::Action { id, action }
                    }
                    (
                        ResourceRequest::ActionMany {
                            actions,
                            respond_to,
                        },
                        Some(Expectation::ActionMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        RecordedRequest::ActionMany { actions }
                    }
                    (request, _) => {
                        let recorded = record_unmatched(request);
                        state
                            .mismatches
                            .push(format!("unexpected request: {:?}", recorded));
                        recorded
                    }
                };
                state.requests.push(recorded);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.state.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects a `get_many`, whatever ids it carries.
    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.state.clone(), |response| Expectation::GetMany {
            response,
        })
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.state.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `create`, whatever payload it carries.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.state.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a single `perform_action` on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.state.clone(), move |response| Expectation::Action {
            id,
            response,
        })
    }

    /// Expects a batch `perform_actions`.
    pub fn expect_actions(&mut self) -> ExpectationBuilder<T, Vec<T::ActionResult>> {
        ExpectationBuilder::new(self.state.clone(), |response| Expectation::ActionMany {
            response,
        })
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.mismatches.is_empty() {
            panic!("Mock received mismatched requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    /// Drains the requests received so far, in arrival order.
    pub fn take_requests(&self) -> Vec<RecordedRequest<T>> {
        std::mem::take(&mut self.state.lock().unwrap().requests)
    }
}

fn record_unmatched<T: ActorEntity>(request: ResourceRequest<T>) -> RecordedRequest<T> {
    match request {
        ResourceRequest::Create { params, .. } => RecordedRequest::Create { params },
        ResourceRequest::Get { id, .. } => RecordedRequest::Get { id },
        ResourceRequest::GetMany { ids, .. } => RecordedRequest::GetMany { ids },
        ResourceRequest::List { .. } => RecordedRequest::List,
        ResourceRequest::Update { id, update, .. } => RecordedRequest::Update { id, update },
        ResourceRequest::Delete { id, .. } => RecordedRequest::Delete { id },
        ResourceRequest::Action { id, action, .. } => RecordedRequest::Action { id, action },
        ResourceRequest::ActionMany { actions, .. } => RecordedRequest::ActionMany { actions },
    }
}

/// Builder that queues one expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: SharedState<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        state: SharedState<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            state,
            build: Box::new(build),
        }
    }

    /// Replies with `value`.
    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        self.state
            .lock()
            .unwrap()
            .expectations
            .push_back(expectation);
    }

    /// Replies with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        self.state
            .lock()
            .unwrap()
            .expectations
            .push_back(expectation);
    }
}

/// Creates a client together with the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate;

    #[derive(Debug, PartialEq)]
    enum ShelfAction {
        Relabel(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Action = ShelfAction;
        type ActionResult = ();
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_raw_receiver() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ShelfCreate {
                    label: "A".to_string(),
                })
                .await
        });

        match receiver.recv().await {
            Some(ResourceRequest::Create { params, respond_to }) => {
                assert_eq!(params.label, "A");
                respond_to.send(Ok(7)).unwrap();
            }
            other => panic!("expected Create, got {:?}", other),
        }

        assert_eq!(create_task.await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_expectations_and_recording() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get_many().return_ok(vec![Shelf {
            id: 2,
            label: "B".to_string(),
        }]);
        mock.expect_actions().return_ok(vec![(), ()]);

        let client = mock.client();
        let found = client.get_many(vec![1, 2]).await.unwrap();
        assert_eq!(found.len(), 1);

        client
            .perform_actions(vec![
                (2, ShelfAction::Relabel("C".to_string())),
                (2, ShelfAction::Relabel("D".to_string())),
            ])
            .await
            .unwrap();

        mock.verify();
        let requests = mock.take_requests();
        assert_eq!(requests.len(), 2);
        match &requests[0] {
            RecordedRequest::GetMany { ids } => assert_eq!(ids, &vec![1, 2]),
            other => panic!("expected GetMany, got {:?}", other),
        }
        match &requests[1] {
            RecordedRequest::ActionMany { actions } => {
                assert_eq!(actions[1], (2, ShelfAction::Relabel("D".to_string())));
            }
            other => panic!("expected ActionMany, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unexpected_request_surfaces_as_dropped_reply() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        assert_eq!(mock.take_requests().len(), 1);
    }
}
