//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the stock actions.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, RequestedLine};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::repositories::{ProductCatalog, ProductRegistry};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Remove `quantity` units from a single product. Returns the level left.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Decrementing {} units of product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::DecrementStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::DecrementStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<ProductError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(ProductId(id)),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    /// One `GetMany` round trip for the whole request.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn find_all_by_id(&self, lines: &[RequestedLine]) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let ids = lines.iter().map(|line| line.id.clone()).collect();
        self.inner.get_many(ids).await.map_err(Self::map_error)
    }

    /// One `ActionMany` round trip; the actor applies every decrement or none.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn update_quantity(&self, lines: &[RequestedLine]) -> Result<(), ProductError> {
        debug!("Sending request");
        let actions = lines
            .iter()
            .map(|line| {
                let action = ProductAction::DecrementStock(line.quantity);
                (line.id.clone(), action)
            })
            .collect();
        self.inner
            .perform_actions(actions)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ProductRegistry for ProductClient {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError> {
        let products = self.list().await?;
        Ok(products.into_iter().find(|p| p.name == name))
    }

    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        let id = self.create_product(params).await?;
        self.get(id.clone())
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}
