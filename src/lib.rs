//! # Order Recipe
//!
//! An order-management application built on resource-oriented Tokio actors.
//!
//! Customers, products and orders each live in their own
//! [`ResourceActor`](actor_framework::ResourceActor), which processes requests one at a
//! time over an owned in-memory store. Use-case services sit on top and talk to the actors
//! through repository traits, so the same service runs against real actors or against
//! in-memory fakes.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain DTOs with typed ids: [`Customer`](model::Customer), [`Product`](model::Product),
//! [`Order`](model::Order), and the [`RequestedLine`](model::RequestedLine) callers send.
//!
//! ### 2. The Resources ([`customer_actor`], [`product_actor`], [`order_actor`])
//! `ActorEntity` implementations: creation rules, updates, stock actions and one error
//! enum per resource.
//!
//! ### 3. The Interface ([`clients`], [`repositories`])
//! Typed clients over the generic `ResourceClient`, implementing the repository traits.
//! Product lookups and stock decrements travel as single batch requests.
//!
//! ### 4. The Use Cases ([`services`])
//! [`CreateOrderService`](services::CreateOrderService) is the core: customer check,
//! batch product lookup, per-line stock check and pricing, persist, then decrement.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`OrderSystem`](lifecycle::OrderSystem) spawns the actors, wires the services and
//! shuts everything down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod repositories;
pub mod services;
