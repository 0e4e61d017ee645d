//! Domain event capability shared by everything an aggregate records.

use super::Timestamp;

/// Something notable that happened to an aggregate.
///
/// The kernel relies only on these two capabilities; payload fields belong
/// to the concrete event type and are never interpreted here.
pub trait DomainEvent {
    /// Returns the event name (e.g., "OrderCreated").
    fn event_name(&self) -> &str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;
}

impl<E: DomainEvent + ?Sized> DomainEvent for Box<E> {
    fn event_name(&self) -> &str {
        (**self).event_name()
    }

    fn occurred_at(&self) -> Timestamp {
        (**self).occurred_at()
    }
}

/// Implements [`DomainEvent`] for a struct from two of its fields.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize)]
/// pub struct OrderCreated {
///     pub order_id: String,
///     pub event_name: String,
///     pub occurred_at: Timestamp,
/// }
///
/// domain_event!(OrderCreated, event_name = event_name, occurred_at = occurred_at);
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event:ident,
        event_name = $name_field:ident,
        occurred_at = $occurred_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event {
            fn event_name(&self) -> &str {
                &self.$name_field
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }
        }
    };
}

pub use domain_event;
