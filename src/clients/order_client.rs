//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; the checks that precede a create live in
//! [`CreateOrderService`](crate::services::CreateOrderService).
use crate::model::{Customer, Order, OrderCreate, OrderId, OrderLine};
use crate::order_actor::OrderError;
use crate::repositories::OrderStore;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(
        skip(self, params),
        fields(customer_id = %params.customer.id, lines = params.lines.len())
    )]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<OrderError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(OrderId(id)),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    async fn create(&self, customer: Customer, lines: Vec<OrderLine>) -> Result<Order, OrderError> {
        let id = self.create_order(OrderCreate { customer, lines }).await?;
        self.get(id.clone()).await?.ok_or(OrderError::NotFound(id))
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{MockClient, RecordedRequest};

    #[tokio::test]
    async fn test_create_returns_stored_order() {
        let customer = Customer::new("c1", "Ada", "ada@example.com");
        let lines = vec![OrderLine {
            product_id: "p1".into(),
            price: 10.0,
            quantity: 3,
        }];
        let stored = Order {
            id: OrderId::from("order_1"),
            customer: customer.clone(),
            lines: lines.clone(),
        };

        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId::from("order_1"));
        mock.expect_get(OrderId::from("order_1"))
            .return_ok(Some(stored.clone()));
        let client = OrderClient::new(mock.client());

        let order = OrderStore::create(&client, customer, lines).await.unwrap();
        assert_eq!(order, stored);

        mock.verify();
        match &mock.take_requests()[0] {
            RecordedRequest::Create { params } => {
                assert_eq!(params.customer.id.as_str(), "c1");
                assert_eq!(params.lines.len(), 1);
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_order_keeps_entity_error() {
        let rejected = OrderError::ValidationError("line for p1 has zero quantity".to_string());
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(rejected.clone())));
        let client = OrderClient::new(mock.client());

        let err = OrderStore::create(
            &client,
            Customer::new("c1", "Ada", "ada@example.com"),
            vec![OrderLine {
                product_id: "p1".into(),
                price: 10.0,
                quantity: 0,
            }],
        )
        .await
        .unwrap_err();
        assert_eq!(err, rejected);
    }
}
