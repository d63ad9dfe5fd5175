//! Customer-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::config::SystemConfig;
use crate::model::{Customer, CustomerId};
use actor_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(config: &SystemConfig) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(config.channel_buffer, CustomerId::sequence());
    let client = CustomerClient::new(generic_client);

    (actor, client)
}
