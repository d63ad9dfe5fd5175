//! # Resource Clients
//!
//! Typed wrappers around the generic [`ResourceClient`](actor_framework::ResourceClient)
//! for each resource actor. Besides their own calls they implement the
//! [`repositories`](crate::repositories) traits, which is how the use-case services reach
//! the actors.

mod customer_client;
mod order_client;
mod product_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
