//! # Generic Actor Server
//!
//! The `ResourceActor` owns the in-memory store of one resource type and processes every
//! request sequentially. It plays the role of a repository: callers never touch the store
//! directly, they send a [`ResourceRequest`] through a cloned [`ResourceClient`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Each instance runs in its own Tokio task and handles one message at a time, so the
/// `store` needs no lock. Two requests from different clients are never interleaved,
/// which makes every single request (including a batch `ActionMany`) atomic with respect
/// to the store. Nothing spans two requests.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer, next_id)` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the returned future.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] struct CounterUpdate;
/// #[derive(Debug)] enum CounterAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Update = CounterUpdate;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, value: 0 })
///     }
///     async fn on_update(&mut self, _: CounterUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.value += 1;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Counter>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(CounterCreate).await.unwrap();
///     assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the request channel. Clients wait when it is full.
    /// * `next_id_fn` - called once per successful `Create` payload to mint the new id.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "order_recipe::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create(&context).await {
                            Ok(()) => {
                                self.store.insert(id.clone(), item);
                                info!(entity_type, %id, size = self.store.len(), "Created");
                                Ok(id)
                            }
                            Err(e) => {
                                warn!(entity_type, error = %e, "on_create failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(
                        entity_type,
                        requested = ids.len(),
                        found = items.len(),
                        "GetMany"
                    );
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => match item.on_update(update, &context).await {
                            Ok(()) => {
                                info!(entity_type, %id, "Updated");
                                Ok(item.clone())
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Update failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match self.store.get(&id) {
                        Some(item) => match item.on_delete(&context).await {
                            Ok(()) => {
                                self.store.remove(&id);
                                info!(entity_type, %id, size = self.store.len(), "Deleted");
                                Ok(())
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => {
                            let result = item
                                .handle_action(action, &context)
                                .await
                                .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                            match &result {
                                Ok(_) => info!(entity_type, %id, "Action ok"),
                                Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                            }
                            result
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::ActionMany {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, count = actions.len(), "ActionMany");
                    let result = self.apply_batch(actions, &context).await;
                    match &result {
                        Ok(results) => info!(entity_type, count = results.len(), "Batch ok"),
                        Err(e) => warn!(entity_type, error = %e, "Batch failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Runs every action against working copies and commits them only when all succeed.
    /// The same id may appear more than once; later actions see earlier effects.
    async fn apply_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut working: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            if !working.contains_key(&id) {
                let item = self
                    .store
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
                working.insert(id.clone(), item);
            }
            if let Some(item) = working.get_mut(&id) {
                let result = item
                    .handle_action(action, context)
                    .await
                    .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
                results.push(result);
            }
        }

        self.store.extend(working);
        Ok(results)
    }
}
