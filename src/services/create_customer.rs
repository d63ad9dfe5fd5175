//! Customer registration.

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate};
use crate::repositories::CustomerRegistry;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateCustomerError {
    #[error("Email address already in use: {0}")]
    EmailAlreadyInUse(String),

    #[error(transparent)]
    Customer(#[from] CustomerError),
}

/// Registers customers, one per email address.
#[derive(Clone)]
pub struct CreateCustomerService {
    customers: Arc<dyn CustomerRegistry>,
}

impl CreateCustomerService {
    pub fn new(customers: Arc<dyn CustomerRegistry>) -> Self {
        Self { customers }
    }

    /// The email check and the insert are two requests, so two concurrent registrations
    /// of the same address can both pass the check.
    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str, email: &str) -> Result<Customer, CreateCustomerError> {
        if self.customers.find_by_email(email).await?.is_some() {
            warn!("Email already in use");
            return Err(CreateCustomerError::EmailAlreadyInUse(email.to_string()));
        }

        let customer = self
            .customers
            .create(CustomerCreate {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;
        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }
}
