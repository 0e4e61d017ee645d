//! Event-capturing aggregate root.
//!
//! An entity embeds an [`AggregateRoot`] as a private field and implements
//! [`Aggregate`] on top of it. Recording an event needs `&mut AggregateRoot`,
//! which only the owning entity can reach, so outside code can read the log
//! and clear it but never append to it.

use tracing::trace;

use super::DomainEvent;

/// Identity plus the ordered log of events an aggregate has captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRoot<E> {
    id: String,
    domain_events: Vec<E>,
}

impl<E: DomainEvent> AggregateRoot<E> {
    /// Creates a root with an empty event log.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain_events: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns captured events in insertion order.
    pub fn domain_events(&self) -> &[E] {
        &self.domain_events
    }

    /// Appends an event to the log. Duplicates are kept.
    pub fn add_domain_event(&mut self, event: E) {
        trace!(
            aggregate_id = %self.id,
            event_name = event.event_name(),
            "domain event recorded"
        );
        self.domain_events.push(event);
    }

    /// Empties the log.
    pub fn clear_events(&mut self) {
        trace!(
            aggregate_id = %self.id,
            cleared = self.domain_events.len(),
            "domain events cleared"
        );
        self.domain_events.clear();
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<E> {
        trace!(
            aggregate_id = %self.id,
            taken = self.domain_events.len(),
            "domain events taken"
        );
        std::mem::take(&mut self.domain_events)
    }
}

/// Public face of an entity built on an [`AggregateRoot`].
///
/// Only shared access to the root is part of the trait. The two sanctioned
/// mutations are delegated by each implementor to its private root.
pub trait Aggregate {
    type Event: DomainEvent;

    fn root(&self) -> &AggregateRoot<Self::Event>;

    /// Empties the event log, typically after an external publisher drained it.
    fn clear_events(&mut self);

    /// Drains the event log.
    fn take_events(&mut self) -> Vec<Self::Event>;

    fn id(&self) -> &str {
        self.root().id()
    }

    fn domain_events(&self) -> &[Self::Event] {
        self.root().domain_events()
    }
}
