//! ActorEntity trait implementation for the Customer domain type.
//!
//! Customers are validated on construction and immutable afterwards. Uniqueness of the
//! email address is a use-case rule enforced by
//! [`CreateCustomerService`](crate::services::CreateCustomerService).

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate(name: &str, email: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(CustomerError::ValidationError(format!(
            "invalid email address: {}",
            email
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    /// Creates a new Customer from creation parameters.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        validate(&params.name, &params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
