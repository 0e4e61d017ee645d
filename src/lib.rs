//! Domain Kernel - building blocks for consistency-bounded entities.
//!
//! This crate provides an explicit outcome type, declarative guards,
//! value-based identifiers and an event-capturing aggregate root, together
//! with the product and order entities that are built from them.

pub mod config;
pub mod domain;
