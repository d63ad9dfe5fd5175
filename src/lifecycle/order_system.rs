use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::SystemConfig;
use crate::services::{
    CreateCustomerService, CreateOrderService, CreateProductService, ShowOrderService,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The main runtime orchestrator for the order management system.
///
/// Owns the three resource actors (customers, products, orders) and exposes both their
/// clients and the use-case services built on top of them.
///
/// # Example
///
/// ```no_run
/// use order_recipe::lifecycle::OrderSystem;
/// use order_recipe::model::RequestedLine;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let system = OrderSystem::new();
///
/// let customer = system.create_customer.execute("Ada", "ada@example.com").await?;
/// let product = system.create_product.execute("Widget", 10.0, 5).await?;
/// let order = system
///     .create_order
///     .execute(&customer.id, &[RequestedLine::new(product.id, 3)])
///     .await?;
/// println!("{} costs {}", order.id, order.total());
///
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    pub create_customer: CreateCustomerService,
    pub create_product: CreateProductService,
    pub create_order: CreateOrderService,
    pub show_order: ShowOrderService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`]. Must be called inside a Tokio
    /// runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Creates the actors, spawns each in its own task and wires the services to their
    /// clients.
    pub fn with_config(config: SystemConfig) -> Self {
        info!(?config, "Starting order system");

        let (customer_actor, customer_client) = crate::customer_actor::new(&config);
        let (product_actor, product_client) = crate::product_actor::new(&config);
        let (order_actor, order_client) = crate::order_actor::new(&config);

        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        let customers = Arc::new(customer_client.clone());
        let products = Arc::new(product_client.clone());
        let orders = Arc::new(order_client.clone());

        Self {
            create_customer: CreateCustomerService::new(customers.clone()),
            create_product: CreateProductService::new(products.clone()),
            create_order: CreateOrderService::new(customers, products, orders.clone()),
            show_order: ShowOrderService::new(orders),
            customer_client,
            product_client,
            order_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Every client clone, including those held by the services, is dropped so the actor
    /// channels close. Then each actor task is awaited. Clones handed out to callers keep
    /// their actor alive, so drop them first.
    ///
    /// # Errors
    /// `ActorTaskFailed` if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        let Self {
            customer_client,
            product_client,
            order_client,
            create_customer,
            create_product,
            create_order,
            show_order,
            handles,
        } = self;

        drop((create_customer, create_product, create_order, show_order));
        drop((customer_client, product_client, order_client));

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
