//! Value-based identity shared by every identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership in the identifier family.
///
/// Two identities are comparable through [`Identity::equals`] only when both
/// implement this trait over the same value type. Types outside the family,
/// even ones exposing a `to_value` method of their own, cannot be passed in,
/// so the family check happens at compile time.
pub trait Identity {
    type Value: PartialEq;

    /// Returns the raw wrapped value.
    fn to_value(&self) -> &Self::Value;

    /// Compares by underlying value with any member of the family.
    ///
    /// Always `false` for `None`.
    fn equals<O>(&self, other: Option<&O>) -> bool
    where
        O: Identity<Value = Self::Value> + ?Sized,
    {
        other.is_some_and(|other| other.to_value() == self.to_value())
    }
}

/// Immutable wrapper around an identifying value.
///
/// Structured keys compare by value, so two identifiers built from equal
/// tuples or vectors are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier<T>(T);

impl<T> Identifier<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the raw wrapped value unchanged.
    pub fn to_value(&self) -> &T {
        &self.0
    }

    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T: PartialEq> Identity for Identifier<T> {
    type Value = T;

    fn to_value(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Identifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
