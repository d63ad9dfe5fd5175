//! Product-specific resource logic, including stock management actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::config::SystemConfig;
use crate::model::{Product, ProductId};
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(config: &SystemConfig) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(config.channel_buffer, ProductId::sequence());
    let client = ProductClient::new(generic_client);

    (actor, client)
}
