//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders are immutable once stored. Customer and stock checks happen before the create
//! request is sent, in [`CreateOrderService`](crate::services::CreateOrderService).

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderLine};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Refuses lines that request nothing. Every `OrderStore` applies this before storing.
pub(crate) fn validate_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    if let Some(line) = lines.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::ValidationError(format!(
            "line for {} has zero quantity",
            line.product_id
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        validate_lines(&params.lines)?;
        Ok(Self {
            id,
            customer: params.customer,
            lines: params.lines,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;

    fn line(product_id: &str, quantity: u32) -> OrderLine {
        OrderLine {
            product_id: product_id.into(),
            price: 1.0,
            quantity,
        }
    }

    #[test]
    fn test_zero_quantity_line_is_named() {
        let params = OrderCreate {
            customer: Customer::new("c1", "Ada", "ada@example.com"),
            lines: vec![line("p1", 2), line("p2", 0)],
        };

        let id = OrderId::from("order_1");
        let err = Order::from_create_params(id, params).unwrap_err();
        assert_eq!(
            err,
            OrderError::ValidationError("line for p2 has zero quantity".to_string())
        );
    }

    #[test]
    fn test_positive_lines_pass() {
        assert!(validate_lines(&[line("p1", 1), line("p2", 3)]).is_ok());
        assert!(validate_lines(&[]).is_ok());
    }
}
