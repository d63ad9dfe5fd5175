//! ActorEntity trait implementation for the Product domain type.
//!
//! Includes the stock actions. A failing `DecrementStock` leaves the product untouched.

use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::ValidationError(format!(
            "invalid price: {}",
            price
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        validate_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `price`: Product price
    /// - `quantity`: Available stock quantity
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `DecrementStock`: Decrements stock if available, returns the remaining level
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::DecrementStock(quantity) => {
                if self.quantity < quantity {
                    return Err(ProductError::InsufficientStock {
                        product_id: self.id.clone(),
                        requested: quantity,
                        available: self.quantity,
                    });
                }
                self.quantity -= quantity;
                Ok(ProductActionResult::DecrementStock(self.quantity))
            }
        }
    }
}
