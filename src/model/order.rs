use crate::model::{Customer, ProductId};
use serde::{Deserialize, Serialize};

string_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// A product/quantity pair as requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedLine {
    pub id: ProductId,
    pub quantity: u32,
}

impl RequestedLine {
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// One priced line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Unit price snapshotted at order time.
    pub price: f64,
    pub quantity: u32,
}

/// Represents a confirmed customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// Orders are built by [`CreateOrderService`](crate::services::CreateOrderService) from
/// [`RequestedLine`]s; the unit price of each [`OrderLine`] is copied from the catalog at
/// that moment and never re-read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Sum of `price * quantity` over every line.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}

/// Payload for persisting a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}
