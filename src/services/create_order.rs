//! Order placement.
//!
//! The flow is: resolve the customer, resolve every requested product in one batch, check
//! and price each requested line, persist the order, then decrement stock. Nothing is
//! written before every line has passed its checks.
//!
//! Stock is decremented after the order is stored and the two writes are not atomic. If
//! the decrement fails the order remains persisted and the error is returned.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, Order, OrderLine, Product, ProductId, RequestedLine};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::repositories::{CustomerLookup, OrderStore, ProductCatalog};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Errors returned by [`CreateOrderService::execute`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Product {0} was not found in the product catalog")]
    ProductNotFound(ProductId),

    /// Deliberately does not name the product.
    #[error("Insufficient stock for one or more products")]
    InsufficientStock,

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Places orders for existing customers.
#[derive(Clone)]
pub struct CreateOrderService {
    customers: Arc<dyn CustomerLookup>,
    catalog: Arc<dyn ProductCatalog>,
    orders: Arc<dyn OrderStore>,
}

impl CreateOrderService {
    pub fn new(
        customers: Arc<dyn CustomerLookup>,
        catalog: Arc<dyn ProductCatalog>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            customers,
            catalog,
            orders,
        }
    }

    /// Creates an order for `customer_id` with one line per requested line.
    ///
    /// # Errors
    /// - `CustomerNotFound` before any product is looked up.
    /// - `ProductNotFound` or `InsufficientStock` for the first failing line, in input
    ///   order. No order is stored and no stock changes.
    /// - Any collaborator error, unchanged.
    #[instrument(skip(self, requested), fields(lines = requested.len()))]
    pub async fn execute(
        &self,
        customer_id: &CustomerId,
        requested: &[RequestedLine],
    ) -> Result<Order, CreateOrderError> {
        debug!(?requested, "create_order called");

        let customer = match self.customers.find_by_id(customer_id).await? {
            Some(customer) => customer,
            None => {
                warn!("Customer not found");
                return Err(CreateOrderError::CustomerNotFound(customer_id.clone()));
            }
        };

        let products = self.catalog.find_all_by_id(requested).await?;
        let lines = price_lines(requested, &products)?;

        let order = self.orders.create(customer, lines).await?;
        self.catalog.update_quantity(requested).await?;

        info!(order_id = %order.id, total = order.total(), "Order created");
        Ok(order)
    }
}

/// Checks each requested line against the resolved products and copies the current
/// price. Lines are checked independently, so repeated ids are not summed.
fn price_lines(
    requested: &[RequestedLine],
    products: &[Product],
) -> Result<Vec<OrderLine>, CreateOrderError> {
    requested
        .iter()
        .map(|line| {
            let product = products.iter().find(|p| p.id == line.id).ok_or_else(|| {
                warn!(product_id = %line.id, "Product not found");
                CreateOrderError::ProductNotFound(line.id.clone())
            })?;

            if product.quantity < line.quantity {
                warn!(
                    product_id = %line.id,
                    requested = line.quantity,
                    available = product.quantity,
                    "Insufficient stock"
                );
                return Err(CreateOrderError::InsufficientStock);
            }

            Ok(OrderLine {
                product_id: line.id.clone(),
                price: product.price,
                quantity: line.quantity,
            })
        })
        .collect()
}
