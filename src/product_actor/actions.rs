//! Custom actions for the Product actor.
//!
//! These are the stock operations that go beyond plain CRUD on a
//! [`Product`](crate::model::Product). Sent one at a time with `perform_action`, or as an
//! all-or-nothing batch with `perform_actions`.

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Removes the given number of units from stock.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the amount exceeds available stock.
    DecrementStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// Stock level left after the decrement.
    DecrementStock(u32),
}
