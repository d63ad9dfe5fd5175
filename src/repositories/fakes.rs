//! In-memory repository fakes for service tests.
//!
//! Each fake keeps its data behind a `Mutex`, records the calls it receives and can be
//! told to fail every call with a given error.

use super::{CustomerLookup, CustomerRegistry, OrderStore, ProductCatalog, ProductRegistry};
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, Order, OrderId, OrderLine, Product};
use crate::model::{ProductCreate, ProductId, RequestedLine};
use crate::order_actor::{entity::validate_lines, OrderError};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check<E: Clone>(failure: &Mutex<Option<E>>) -> Result<(), E> {
    match lock(failure).as_ref() {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

// =============================================================================
// CUSTOMERS
// =============================================================================

#[derive(Default)]
pub struct InMemoryCustomers {
    customers: Mutex<Vec<Customer>>,
    lookups: Mutex<Vec<CustomerId>>,
    failure: Mutex<Option<CustomerError>>,
}

impl InMemoryCustomers {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: Mutex::new(customers),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with `error`.
    pub fn fail_with(&self, error: CustomerError) {
        *lock(&self.failure) = Some(error);
    }

    /// Ids passed to `find_by_id`, in call order.
    pub fn lookups(&self) -> Vec<CustomerId> {
        lock(&self.lookups).clone()
    }

    pub fn customers(&self) -> Vec<Customer> {
        lock(&self.customers).clone()
    }
}

#[async_trait]
impl CustomerLookup for InMemoryCustomers {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        lock(&self.lookups).push(id.clone());
        check(&self.failure)?;
        Ok(lock(&self.customers).iter().find(|c| &c.id == id).cloned())
    }
}

#[async_trait]
impl CustomerRegistry for InMemoryCustomers {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        check(&self.failure)?;
        Ok(lock(&self.customers)
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn create(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        check(&self.failure)?;
        let mut customers = lock(&self.customers);
        let id = CustomerId(format!("customer_{}", customers.len() + 1));
        let customer = Customer::new(id, params.name, params.email);
        customers.push(customer.clone());
        Ok(customer)
    }
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Default)]
pub struct InMemoryCatalog {
    products: Mutex<Vec<Product>>,
    lookups: Mutex<Vec<Vec<ProductId>>>,
    updates: Mutex<Vec<Vec<RequestedLine>>>,
    failure: Mutex<Option<ProductError>>,
    update_failure: Mutex<Option<ProductError>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with `error`.
    pub fn fail_with(&self, error: ProductError) {
        *lock(&self.failure) = Some(error);
    }

    /// Makes only `update_quantity` fail with `error`.
    pub fn fail_updates_with(&self, error: ProductError) {
        *lock(&self.update_failure) = Some(error);
    }

    /// Ids passed to each `find_all_by_id` call.
    pub fn lookups(&self) -> Vec<Vec<ProductId>> {
        lock(&self.lookups).clone()
    }

    /// Lines passed to each `update_quantity` call.
    pub fn quantity_updates(&self) -> Vec<Vec<RequestedLine>> {
        lock(&self.updates).clone()
    }

    pub fn quantity(&self, id: &ProductId) -> Option<u32> {
        lock(&self.products)
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.quantity)
    }

    /// Changes a stored price, as a concurrent catalog edit would.
    pub fn set_price(&self, id: &ProductId, price: f64) {
        if let Some(product) = lock(&self.products).iter_mut().find(|p| &p.id == id) {
            product.price = price;
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn find_all_by_id(&self, lines: &[RequestedLine]) -> Result<Vec<Product>, ProductError> {
        lock(&self.lookups).push(lines.iter().map(|line| line.id.clone()).collect());
        check(&self.failure)?;
        let products = lock(&self.products);
        Ok(products
            .iter()
            .filter(|p| lines.iter().any(|line| line.id == p.id))
            .cloned()
            .collect())
    }

    async fn update_quantity(&self, lines: &[RequestedLine]) -> Result<(), ProductError> {
        lock(&self.updates).push(lines.to_vec());
        check(&self.failure)?;
        check(&self.update_failure)?;

        // Validate the whole batch before touching anything.
        let mut products = lock(&self.products);
        let mut remaining: Vec<Product> = products.clone();
        for line in lines {
            let product = remaining
                .iter_mut()
                .find(|p| p.id == line.id)
                .ok_or_else(|| ProductError::NotFound(line.id.clone()))?;
            if product.quantity < line.quantity {
                return Err(ProductError::InsufficientStock {
                    product_id: line.id.clone(),
                    requested: line.quantity,
                    available: product.quantity,
                });
            }
            product.quantity -= line.quantity;
        }
        *products = remaining;
        Ok(())
    }
}

#[async_trait]
impl ProductRegistry for InMemoryCatalog {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductError> {
        check(&self.failure)?;
        Ok(lock(&self.products)
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        check(&self.failure)?;
        let mut products = lock(&self.products);
        let id = ProductId(format!("product_{}", products.len() + 1));
        let product = Product::new(id, params.name, params.price, params.quantity);
        products.push(product.clone());
        Ok(product)
    }
}

// =============================================================================
// ORDERS
// =============================================================================

#[derive(Default)]
pub struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
    failure: Mutex<Option<OrderError>>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `error`.
    pub fn fail_with(&self, error: OrderError) {
        *lock(&self.failure) = Some(error);
    }

    /// Every order persisted so far.
    pub fn orders(&self) -> Vec<Order> {
        lock(&self.orders).clone()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrders {
    async fn create(&self, customer: Customer, lines: Vec<OrderLine>) -> Result<Order, OrderError> {
        check(&self.failure)?;
        validate_lines(&lines)?;
        let mut orders = lock(&self.orders);
        let order = Order {
            id: OrderId(format!("order_{}", orders.len() + 1)),
            customer,
            lines,
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        check(&self.failure)?;
        Ok(lock(&self.orders).iter().find(|o| &o.id == id).cloned())
    }
}
