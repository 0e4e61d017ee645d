//! Order domain module.
//!
//! Orders own their items; items reference products by ID only.
//!
//! # Events
//!
//! - `OrderCreated` - Recorded when an order is created

mod aggregate;
mod events;
mod item;
mod totals;

pub use aggregate::{Order, MAX_ORDER_ITEMS, MIN_ORDER_ITEMS};
pub use events::OrderCreated;
pub use item::{OrderItem, MAX_QUANTITY, MIN_QUANTITY};
pub use totals::total_quantity;
