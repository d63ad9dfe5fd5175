//! # Customer Client
//!
//! Provides a high-level API for interacting with the `Customer` actor.
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use crate::repositories::{CustomerLookup, CustomerRegistry};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<CustomerError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(CustomerId(id)),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl CustomerLookup for CustomerClient {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id.clone()).await
    }
}

#[async_trait]
impl CustomerRegistry for CustomerClient {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        let customers = self.list().await?;
        Ok(customers.into_iter().find(|c| c.email == email))
    }

    async fn create(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        let id = self.create_customer(params).await?;
        self.get(id.clone())
            .await?
            .ok_or(CustomerError::NotFound(id))
    }
}
