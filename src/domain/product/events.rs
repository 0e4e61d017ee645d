//! Product domain events.

use serde::Serialize;

use crate::domain::foundation::{domain_event, Timestamp};

/// Recorded when a product passes validation and is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    /// ID of the created product.
    pub product_id: String,

    pub event_name: &'static str,

    /// When the product was created.
    pub occurred_at: Timestamp,
}

impl ProductCreated {
    pub const NAME: &'static str = "ProductCreated";

    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            event_name: Self::NAME,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}

domain_event!(ProductCreated, event_name = event_name, occurred_at = occurred_at);
