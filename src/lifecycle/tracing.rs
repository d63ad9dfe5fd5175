//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing_subscriber` formatter filtered by `RUST_LOG`.
//! The compact format hides the module path (`with_target(false)`) since every actor
//! event already carries an `entity_type` field.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` per resource
//! - **Store Operations**: `Created`, `Get`, `GetMany`, `Action ok`, `Batch ok`
//! - **Use Cases**: one span per service call, with `warn!` events for every rejected
//!   request. A stock rejection names the product in its `product_id` field even though
//!   the returned error does not.
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run          # request payloads
//! RUST_LOG=actor_framework=debug,order_recipe=info cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing an order with `RUST_LOG=info`:
//!
//! ```text
//! INFO execute{customer_id=CustomerId("customer_1") lines=2}:create_order{...}: Sending create_order to actor
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Batch ok entity_type="Product" count=2
//! INFO execute{customer_id=CustomerId("customer_1") lines=2}: Order created order_id=order_1 total=35.0
//! ```
//!
//! and a rejected one:
//!
//! ```text
//! WARN execute{customer_id=CustomerId("customer_1") lines=1}: Insufficient stock product_id=product_1 requested=50 available=2
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
