use order_recipe::config::SystemConfig;
use order_recipe::lifecycle::{setup_tracing, OrderSystem};
use order_recipe::model::RequestedLine;
use order_recipe::services::CreateOrderError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    let system = OrderSystem::with_config(config);

    let customer = async {
        info!("Registering customer");
        system
            .create_customer
            .execute("Alice", "alice@example.com")
            .await
    }
    .instrument(tracing::info_span!("customer_registration"))
    .await?;
    info!(customer_id = %customer.id, "Customer registered");

    let keyboard = system.create_product.execute("Keyboard", 25.0, 10).await?;
    let mouse = system.create_product.execute("Mouse", 10.0, 2).await?;

    let order = async {
        info!("Placing order");
        system
            .create_order
            .execute(
                &customer.id,
                &[
                    RequestedLine::new(keyboard.id.clone(), 1),
                    RequestedLine::new(mouse.id.clone(), 1),
                ],
            )
            .await
    }
    .instrument(tracing::info_span!("order_processing"))
    .await?;
    info!(order_id = %order.id, total = order.total(), "Order placed");

    let shown = system.show_order.execute(&order.id).await?;
    for line in &shown.lines {
        info!(
            product_id = %line.product_id,
            price = line.price,
            quantity = line.quantity,
            "Order line"
        );
    }

    // Only one mouse is left.
    match system
        .create_order
        .execute(&customer.id, &[RequestedLine::new(mouse.id.clone(), 5)])
        .instrument(tracing::info_span!("order_processing"))
        .await
    {
        Err(CreateOrderError::InsufficientStock) => warn!("Second order rejected as expected"),
        Err(e) => return Err(e.into()),
        Ok(order) => warn!(order_id = %order.id, "Second order unexpectedly accepted"),
    }

    let remaining = system.product_client.check_stock(mouse.id).await?;
    info!(remaining, "Mouse stock after orders");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
