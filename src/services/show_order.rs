//! Order retrieval.

use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use crate::repositories::OrderStore;
use std::sync::Arc;
use thiserror::Error;
use tracing::{instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShowOrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Clone)]
pub struct ShowOrderService {
    orders: Arc<dyn OrderStore>,
}

impl ShowOrderService {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, order_id: &OrderId) -> Result<Order, ShowOrderError> {
        match self.orders.find_by_id(order_id).await? {
            Some(order) => Ok(order),
            None => {
                warn!("Order not found");
                Err(ShowOrderError::OrderNotFound(order_id.clone()))
            }
        }
    }
}
