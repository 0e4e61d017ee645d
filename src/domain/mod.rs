//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Kernel primitives (outcome, guards, identifiers, events, aggregate root)
//! - `product` - Product aggregate and its name value object
//! - `order` - Order aggregate, order items and quantity totals

pub mod foundation;
pub mod order;
pub mod product;
