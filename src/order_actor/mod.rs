//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::config::SystemConfig;
use crate::model::{Order, OrderId};
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(config: &SystemConfig) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(config.channel_buffer, OrderId::sequence());
    let client = OrderClient::new(generic_client);

    (actor, client)
}
