//! Order domain events.

use serde::Serialize;

use crate::domain::foundation::{domain_event, Timestamp};

/// Recorded when an order passes validation and is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    /// ID of the created order.
    pub order_id: String,

    /// When the order was created.
    pub occurred_at: Timestamp,

    pub event_name: &'static str,
}

impl OrderCreated {
    pub const NAME: &'static str = "OrderCreated";

    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            occurred_at: Timestamp::now(),
            event_name: Self::NAME,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }
}

domain_event!(OrderCreated, event_name = event_name, occurred_at = occurred_at);
