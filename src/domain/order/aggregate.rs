//! Order aggregate - groups order items under one identity.

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::domain::foundation::{Aggregate, AggregateRoot, Guard, Outcome};

use super::{total_quantity, OrderCreated, OrderItem};

/// Minimum number of items in an order.
pub const MIN_ORDER_ITEMS: usize = 1;

/// Maximum number of items in an order.
pub const MAX_ORDER_ITEMS: usize = 50;

/// The Order aggregate root.
///
/// # Invariants
///
/// - `id` is non-blank
/// - holds between 1 and 50 items
#[derive(Debug, Clone)]
pub struct Order {
    root: AggregateRoot<OrderCreated>,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order and records `OrderCreated`.
    ///
    /// The ID is checked before the item count, so a blank ID is
    /// reported even when the item count is also wrong.
    pub fn create(id: impl Into<String>, items: Vec<OrderItem>) -> Outcome<Order> {
        let id = id.into();
        let guard = Guard::combine([
            Guard::not_empty(id.as_str(), "order-id"),
            Guard::is_in_range(items.len(), MIN_ORDER_ITEMS, MAX_ORDER_ITEMS, "order-items"),
        ]);
        if let Some(message) = guard.error() {
            debug!(error = message, items = items.len(), "order rejected");
            return Outcome::fail(message);
        }

        let created = OrderCreated::new(id.clone());
        let mut order = Self {
            root: AggregateRoot::new(id),
            items,
        };
        order.root.add_domain_event(created);

        Outcome::ok(order)
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the summed quantity over all items.
    pub fn total_quantity(&self) -> u64 {
        total_quantity(&self.items)
    }
}

impl Aggregate for Order {
    type Event = OrderCreated;

    fn root(&self) -> &AggregateRoot<OrderCreated> {
        &self.root
    }

    fn clear_events(&mut self) {
        self.root.clear_events();
    }

    fn take_events(&mut self) -> Vec<OrderCreated> {
        self.root.take_events()
    }
}

/// Serializes as the list of its items.
impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
