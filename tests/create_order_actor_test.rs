//! CreateOrderService driven through the real clients, with every actor replaced by a
//! scripted `MockClient` so the exact request sequence can be asserted.

use actor_framework::mock::{MockClient, RecordedRequest};
use actor_framework::FrameworkError;
use order_recipe::clients::{CustomerClient, OrderClient, ProductClient};
use order_recipe::model::{Customer, CustomerId, Order, OrderId, OrderLine, Product, ProductId};
use order_recipe::model::RequestedLine;
use order_recipe::order_actor::OrderError;
use order_recipe::product_actor::{ProductAction, ProductActionResult, ProductError};
use order_recipe::services::{CreateOrderError, CreateOrderService};
use std::sync::Arc;

struct Mocks {
    customers: MockClient<Customer>,
    products: MockClient<Product>,
    orders: MockClient<Order>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            customers: MockClient::new(),
            products: MockClient::new(),
            orders: MockClient::new(),
        }
    }

    fn service(&self) -> CreateOrderService {
        CreateOrderService::new(
            Arc::new(CustomerClient::new(self.customers.client())),
            Arc::new(ProductClient::new(self.products.client())),
            Arc::new(OrderClient::new(self.orders.client())),
        )
    }

    fn expect_customer(&mut self, id: &str, found: Option<Customer>) {
        self.customers
            .expect_get(CustomerId::from(id))
            .return_ok(found);
    }

    fn verify(&self) {
        self.customers.verify();
        self.products.verify();
        self.orders.verify();
    }
}

fn c1() -> Customer {
    Customer::new("c1", "Ada", "ada@example.com")
}

#[tokio::test]
async fn test_successful_order_request_sequence() {
    let mut mocks = Mocks::new();
    let line = OrderLine {
        product_id: "p1".into(),
        price: 10.0,
        quantity: 3,
    };
    let stored = Order {
        id: OrderId::from("order_1"),
        customer: c1(),
        lines: vec![line.clone()],
    };

    mocks.expect_customer("c1", Some(c1()));
    mocks
        .products
        .expect_get_many()
        .return_ok(vec![Product::new("p1", "Widget", 10.0, 5)]);
    mocks
        .orders
        .expect_create()
        .return_ok(OrderId::from("order_1"));
    mocks
        .orders
        .expect_get(OrderId::from("order_1"))
        .return_ok(Some(stored.clone()));
    mocks
        .products
        .expect_actions()
        .return_ok(vec![ProductActionResult::DecrementStock(2)]);

    let order = mocks
        .service()
        .execute(&"c1".into(), &[RequestedLine::new("p1", 3)])
        .await
        .unwrap();

    assert_eq!(order, stored);
    mocks.verify();

    let product_requests = mocks.products.take_requests();
    assert_eq!(product_requests.len(), 2);
    match &product_requests[0] {
        RecordedRequest::GetMany { ids } => assert_eq!(ids, &vec![ProductId::from("p1")]),
        other => panic!("expected GetMany, got {:?}", other),
    }
    match &product_requests[1] {
        RecordedRequest::ActionMany { actions } => assert_eq!(
            actions,
            &vec![(ProductId::from("p1"), ProductAction::DecrementStock(3))]
        ),
        other => panic!("expected ActionMany, got {:?}", other),
    }

    match &mocks.orders.take_requests()[0] {
        RecordedRequest::Create { params } => assert_eq!(params.lines, vec![line]),
        other => panic!("expected Create, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_customer_sends_no_product_request() {
    let mut mocks = Mocks::new();
    mocks.expect_customer("c9", None);

    let err = mocks
        .service()
        .execute(&"c9".into(), &[RequestedLine::new("p1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err, CreateOrderError::CustomerNotFound("c9".into()));
    mocks.verify();
    assert!(mocks.products.take_requests().is_empty());
    assert!(mocks.orders.take_requests().is_empty());
}

#[tokio::test]
async fn test_missing_product_sends_no_writes() {
    let mut mocks = Mocks::new();
    mocks.expect_customer("c1", Some(c1()));
    mocks.products.expect_get_many().return_ok(vec![]);

    let err = mocks
        .service()
        .execute(&"c1".into(), &[RequestedLine::new("p2", 1)])
        .await
        .unwrap_err();

    assert_eq!(err, CreateOrderError::ProductNotFound("p2".into()));
    mocks.verify();
    assert_eq!(mocks.products.take_requests().len(), 1);
    assert!(mocks.orders.take_requests().is_empty());
}

#[tokio::test]
async fn test_insufficient_stock_sends_no_writes() {
    let mut mocks = Mocks::new();
    mocks.expect_customer("c1", Some(c1()));
    mocks
        .products
        .expect_get_many()
        .return_ok(vec![Product::new("p1", "Widget", 10.0, 2)]);

    let err = mocks
        .service()
        .execute(&"c1".into(), &[RequestedLine::new("p1", 5)])
        .await
        .unwrap_err();

    assert_eq!(err, CreateOrderError::InsufficientStock);
    mocks.verify();
    assert!(mocks.orders.take_requests().is_empty());
}

#[tokio::test]
async fn test_order_actor_failure_skips_decrement() {
    let mut mocks = Mocks::new();
    mocks.expect_customer("c1", Some(c1()));
    mocks
        .products
        .expect_get_many()
        .return_ok(vec![Product::new("p1", "Widget", 10.0, 5)]);
    mocks
        .orders
        .expect_create()
        .return_err(FrameworkError::ActorClosed);

    let err = mocks
        .service()
        .execute(&"c1".into(), &[RequestedLine::new("p1", 1)])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CreateOrderError::Order(OrderError::ActorCommunicationError(_))
    ));
    mocks.verify();
    assert_eq!(mocks.products.take_requests().len(), 1);
}

#[tokio::test]
async fn test_decrement_rejection_surfaces_after_order_is_stored() {
    let stored = Order {
        id: OrderId::from("order_1"),
        customer: c1(),
        lines: vec![],
    };
    let refused = ProductError::InsufficientStock {
        product_id: "p1".into(),
        requested: 4,
        available: 1,
    };
    let mut mocks = Mocks::new();
    mocks.expect_customer("c1", Some(c1()));
    mocks
        .products
        .expect_get_many()
        .return_ok(vec![Product::new("p1", "Widget", 10.0, 5)]);
    mocks
        .orders
        .expect_create()
        .return_ok(OrderId::from("order_1"));
    mocks
        .orders
        .expect_get(OrderId::from("order_1"))
        .return_ok(Some(stored));
    mocks
        .products
        .expect_actions()
        .return_err(FrameworkError::EntityError(Box::new(refused.clone())));

    let err = mocks
        .service()
        .execute(&"c1".into(), &[RequestedLine::new("p1", 4)])
        .await
        .unwrap_err();

    assert_eq!(err, CreateOrderError::Product(refused));
    mocks.verify();
}
