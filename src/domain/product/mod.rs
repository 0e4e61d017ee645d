//! Product domain module.
//!
//! # Events
//!
//! - `ProductCreated` - Recorded when a product is created

mod aggregate;
mod events;
mod name;

pub use aggregate::{Product, MAX_DESCRIPTION_LENGTH, MIN_DESCRIPTION_LENGTH};
pub use events::ProductCreated;
pub use name::{ProductName, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
