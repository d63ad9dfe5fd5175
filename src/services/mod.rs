//! # Use-Case Services
//!
//! Each service runs one application use case against the
//! [`repositories`](crate::repositories) traits. Services hold no state of their own
//! beyond their collaborators, so they are cheap to clone and safe to share.

mod create_customer;
mod create_order;
mod create_product;
mod show_order;

pub use create_customer::{CreateCustomerError, CreateCustomerService};
pub use create_order::{CreateOrderError, CreateOrderService};
pub use create_product::{CreateProductError, CreateProductService};
pub use show_order::{ShowOrderError, ShowOrderService};
