//! # ActorEntity Trait
//!
//! The contract every stored resource (Customer, Product, Order) implements so that a
//! generic [`ResourceActor`](crate::ResourceActor) can own it. The associated types pin
//! down the id, the creation and update payloads, the custom actions and the error type,
//! so a `ProductCreate` payload can never reach the customer store.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Implement them only when the resource validates itself on
//! the way in or out of the store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored resource must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so that a resource may consult other actors while it is being
/// created. The `Context` associated type carries those dependencies and is handed to
/// [`ResourceActor::run`](crate::ResourceActor::run), not to the constructor.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier of the resource. Generated by the actor's id function.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `DecrementStock`).
    type Action: Send + Sync + Debug;

    /// Result returned by a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the hooks. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the resource from its freshly generated id and the creation payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Runs after construction and before the resource is inserted into the store.
    /// An error here discards the resource.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload to the stored resource.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the resource is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handles a custom resource-specific action.
    ///
    /// When the action arrives as part of a batch the actor calls this on a working
    /// copy, so a failing action must not rely on partial mutation being rolled back by
    /// the implementation itself.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
