//! Order line referencing a product.

use serde::Serialize;

use crate::domain::foundation::{Guard, Outcome};

/// Minimum quantity per order item.
pub const MIN_QUANTITY: u32 = 1;

/// Maximum quantity per order item.
pub const MAX_QUANTITY: u32 = 100;

/// A quantity of one product within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    product_id: String,
    quantity: u32,
}

impl OrderItem {
    /// Creates an item, failing if the quantity is outside 1-100.
    pub fn create(product_id: impl Into<String>, quantity: u32) -> Outcome<OrderItem> {
        let guard = Guard::is_in_range(quantity, MIN_QUANTITY, MAX_QUANTITY, "quantity");
        if let Some(message) = guard.error() {
            return Outcome::fail(message);
        }

        Outcome::ok(Self {
            product_id: product_id.into(),
            quantity,
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
