//! # Actor Framework
//!
//! Type-safe, in-process resource stores built on Tokio actors. Each resource type gets
//! one [`ResourceActor`] task that owns a `HashMap` store and serves CRUD requests, custom
//! actions and batch operations over an mpsc channel. Callers talk to it through a cheap,
//! cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the resource, its payloads, actions and error type.
//! 2. **Runtime** ([`ResourceActor`]) - sequential message processing over an owned store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/reply calls.
//!
//! ## Batch operations
//!
//! Two requests exist for repository-style callers that must not pay one round trip per
//! item:
//!
//! - [`ResourceClient::get_many`] returns the entities that exist for a list of ids.
//! - [`ResourceClient::perform_actions`] applies a list of actions all-or-nothing.
//!
//! Because an actor handles one request at a time, each batch is atomic with respect to
//! the store. Sequences of requests are not.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`] rather than to the constructor, so
//! actors can be created first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts replies and records every request it receives.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
