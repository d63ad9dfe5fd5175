use actor_framework::ActorClient;
use order_recipe::config::SystemConfig;
use order_recipe::lifecycle::OrderSystem;
use order_recipe::model::{CustomerId, OrderId, ProductId, ProductUpdate, RequestedLine};
use order_recipe::product_actor::ProductError;
use order_recipe::services::{
    CreateCustomerError, CreateOrderError, CreateProductError, ShowOrderError,
};

#[tokio::test]
async fn test_full_order_flow() {
    let system = OrderSystem::new();

    let customer = system
        .create_customer
        .execute("Alice", "alice@example.com")
        .await
        .unwrap();
    assert_eq!(customer.id, CustomerId::from("customer_1"));

    let keyboard = system
        .create_product
        .execute("Keyboard", 25.0, 10)
        .await
        .unwrap();
    let mouse = system
        .create_product
        .execute("Mouse", 10.0, 5)
        .await
        .unwrap();

    let order = system
        .create_order
        .execute(
            &customer.id,
            &[
                RequestedLine::new(keyboard.id.clone(), 2),
                RequestedLine::new(mouse.id.clone(), 3),
            ],
        )
        .await
        .unwrap();

    assert_eq!(order.id, OrderId::from("order_1"));
    assert_eq!(order.customer, customer);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].product_id, keyboard.id);
    assert_eq!(order.lines[0].price, 25.0);
    assert_eq!(order.total(), 80.0);

    let products = &system.product_client;
    assert_eq!(products.check_stock(keyboard.id).await.unwrap(), 8);
    assert_eq!(products.check_stock(mouse.id).await.unwrap(), 2);

    let shown = system.show_order.execute(&order.id).await.unwrap();
    assert_eq!(shown, order);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_orders_leave_stock_and_orders_untouched() {
    let system = OrderSystem::new();
    let customer = system
        .create_customer
        .execute("Bob", "bob@example.com")
        .await
        .unwrap();
    let product = system
        .create_product
        .execute("Lamp", 40.0, 2)
        .await
        .unwrap();

    let err = system
        .create_order
        .execute(&customer.id, &[RequestedLine::new(product.id.clone(), 5)])
        .await
        .unwrap_err();
    assert_eq!(err, CreateOrderError::InsufficientStock);

    let err = system
        .create_order
        .execute(
            &customer.id,
            &[
                RequestedLine::new(product.id.clone(), 1),
                RequestedLine::new("product_404", 1),
            ],
        )
        .await
        .unwrap_err();
    assert_eq!(err, CreateOrderError::ProductNotFound("product_404".into()));

    let err = system
        .create_order
        .execute(
            &"customer_404".into(),
            &[RequestedLine::new(product.id.clone(), 1)],
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CreateOrderError::CustomerNotFound("customer_404".into())
    );

    assert_eq!(
        system.product_client.check_stock(product.id).await.unwrap(),
        2
    );
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_is_snapshotted_at_order_time() {
    let system = OrderSystem::new();
    let customer = system
        .create_customer
        .execute("Carol", "carol@example.com")
        .await
        .unwrap();
    let product = system
        .create_product
        .execute("Pen", 1.5, 100)
        .await
        .unwrap();

    let order = system
        .create_order
        .execute(&customer.id, &[RequestedLine::new(product.id.clone(), 10)])
        .await
        .unwrap();

    system
        .product_client
        .update_product(
            product.id.clone(),
            ProductUpdate {
                price: Some(3.0),
                quantity: None,
            },
        )
        .await
        .unwrap();

    let shown = system.show_order.execute(&order.id).await.unwrap();
    assert_eq!(shown.lines[0].price, 1.5);
    assert_eq!(shown.total(), 15.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_drive_stock_negative() {
    let system = OrderSystem::with_config(SystemConfig { channel_buffer: 4 });
    let customer = system
        .create_customer
        .execute("Dave", "dave@example.com")
        .await
        .unwrap();
    let product = system
        .create_product
        .execute("Chair", 80.0, 5)
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let service = system.create_order.clone();
        let customer_id = customer.id.clone();
        let product_id = product.id.clone();
        tasks.push(tokio::spawn(async move {
            service
                .execute(&customer_id, &[RequestedLine::new(product_id, 1)])
                .await
        }));
    }

    let mut placed = 0;
    let mut refused_after_store = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(CreateOrderError::InsufficientStock) => {}
            // A check can pass while another order is between its check and its
            // decrement. That order stays stored and its decrement is refused.
            Err(CreateOrderError::Product(e)) => {
                assert!(matches!(e, ProductError::InsufficientStock { .. }));
                refused_after_store += 1;
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert!(placed <= 5);
    let remaining = system.product_client.check_stock(product.id).await.unwrap();
    assert_eq!(remaining, 5 - placed);

    let stored = system.order_client.list().await.unwrap().len();
    assert_eq!(stored, (placed + refused_after_store) as usize);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_registration_uniqueness() {
    let system = OrderSystem::new();

    system
        .create_customer
        .execute("Erin", "erin@example.com")
        .await
        .unwrap();
    let err = system
        .create_customer
        .execute("Erin Again", "erin@example.com")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CreateCustomerError::EmailAlreadyInUse("erin@example.com".to_string())
    );

    system
        .create_product
        .execute("Desk", 120.0, 1)
        .await
        .unwrap();
    let err = system
        .create_product
        .execute("Desk", 99.0, 1)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CreateProductError::NameAlreadyInUse("Desk".to_string())
    );

    let err = system
        .show_order
        .execute(&"order_1".into())
        .await
        .unwrap_err();
    assert_eq!(err, ShowOrderError::OrderNotFound("order_1".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_decrement_batch_is_all_or_nothing() {
    use order_recipe::repositories::ProductCatalog;

    let system = OrderSystem::new();
    let a = system.create_product.execute("A", 1.0, 3).await.unwrap();
    let b = system.create_product.execute("B", 1.0, 1).await.unwrap();

    let err = system
        .product_client
        .update_quantity(&[
            RequestedLine::new(a.id.clone(), 2),
            RequestedLine::new(b.id.clone(), 4),
        ])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ProductError::InsufficientStock {
            product_id: b.id.clone(),
            requested: 4,
            available: 1,
        }
    );

    assert_eq!(system.product_client.check_stock(a.id).await.unwrap(), 3);
    assert_eq!(system.product_client.check_stock(b.id).await.unwrap(), 1);

    let err = system
        .product_client
        .check_stock(ProductId::from("product_99"))
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::NotFound("product_99".into()));

    system.shutdown().await.unwrap();
}
