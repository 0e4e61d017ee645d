//! Foundation module - Shared domain primitives.
//!
//! Contains the outcome type, guards, identifiers, events and the aggregate
//! root that every entity in the domain is built from.

mod aggregate;
mod errors;
mod events;
mod guard;
mod identifier;
mod outcome;
mod timestamp;
mod unique_id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use errors::{DomainError, ErrorCode, RetrievalError, ValidationError};
pub use events::{domain_event, DomainEvent};
pub use guard::Guard;
pub use identifier::{Identifier, Identity};
pub use outcome::{GuardResult, Outcome};
pub use timestamp::Timestamp;
pub use unique_id::{IdValue, UniqueId};
