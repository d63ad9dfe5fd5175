//! # Repositories
//!
//! The persistence seams the use-case services depend on. Services hold them as
//! `Arc<dyn Trait>` so the actor-backed clients in [`crate::clients`] and the in-memory
//! [`fakes`] are interchangeable.

pub mod fakes;

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, Order, OrderId, OrderLine, Product};
use crate::model::{ProductCreate, RequestedLine};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Resolves customers by identifier.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Registers customers.
#[async_trait]
pub trait CustomerRegistry: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError>;

    async fn create(&self, params: CustomerCreate) -> Result<Customer, CustomerError>;
}

/// Batch product resolution and stock maintenance.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns the products matching the requested ids. Unknown ids are left out, so the
    /// result may be shorter than the input.
    async fn find_all_by_id(&self, lines: &[RequestedLine]) -> Result<Vec<Product>, ProductError>;

    /// Decrements the stock of every listed product by its requested quantity.
    async fn update_quantity(&self, lines: &[RequestedLine]) -> Result<(), ProductError>;
}

/// Registers products.
#[async_trait]
pub trait ProductRegistry: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError>;

    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError>;
}

/// Builds, persists and reads order aggregates.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order and returns it as stored, id included.
    async fn create(&self, customer: Customer, lines: Vec<OrderLine>) -> Result<Order, OrderError>;

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;
}
