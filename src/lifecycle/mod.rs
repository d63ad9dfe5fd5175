//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the resource actors, plus the tracing setup.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem`] is the composition root:
//!
//! 1. **Actor Creation** - one actor and client per resource, sized from
//!    [`SystemConfig`](crate::config::SystemConfig).
//! 2. **Service Wiring** - the clients are handed to the use-case services as their
//!    repositories.
//! 3. **Graceful Shutdown** - dropping every client closes the channels; each actor then
//!    drains and exits, and the system awaits the tasks.
//!
//! None of the three actors needs another one while handling a request, so every actor
//! runs with a `()` context and the dependency graph is trivially acyclic. Coordination
//! across resources happens in [`CreateOrderService`](crate::services::CreateOrderService).
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber. See the [`tracing`] module for what gets
//! logged at each level.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
