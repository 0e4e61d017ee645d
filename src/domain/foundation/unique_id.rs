//! Self-generating identifier over text or numeric values.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Identifier, Identity};

/// Raw value held by a [`UniqueId`].
///
/// Numbers are integers; a fractional id such as `1.5` has no representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(i64),
}

impl IdValue {
    /// Returns true for `""` and `0`, the values [`UniqueId`] discards.
    pub fn is_falsy(&self) -> bool {
        match self {
            IdValue::Text(s) => s.is_empty(),
            IdValue::Number(n) => *n == 0,
        }
    }

    /// Returns the text value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IdValue::Text(s) => Some(s.as_str()),
            IdValue::Number(_) => None,
        }
    }
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdValue::Text(s) => write!(f, "{}", s),
            IdValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for IdValue {
    fn from(s: &str) -> Self {
        IdValue::Text(s.to_string())
    }
}

impl From<String> for IdValue {
    fn from(s: String) -> Self {
        IdValue::Text(s)
    }
}

impl From<i64> for IdValue {
    fn from(n: i64) -> Self {
        IdValue::Number(n)
    }
}

impl From<i32> for IdValue {
    fn from(n: i32) -> Self {
        IdValue::Number(i64::from(n))
    }
}

impl From<Uuid> for IdValue {
    fn from(uuid: Uuid) -> Self {
        IdValue::Text(uuid.to_string())
    }
}

/// Identifier that generates a random UUID v4 string when given nothing.
///
/// Falsy inputs (`""`, `0`) are treated as "nothing" and replaced by a
/// generated value too. Deserialization goes through the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "IdValue", from = "Option<IdValue>")]
pub struct UniqueId(Identifier<IdValue>);

impl UniqueId {
    /// Creates a UniqueId holding a freshly generated UUID v4 string.
    pub fn new() -> Self {
        Self(Identifier::new(IdValue::from(Uuid::new_v4())))
    }

    /// Creates a UniqueId from a supplied value, generating one if it is falsy.
    pub fn from_value(value: impl Into<IdValue>) -> Self {
        Self::from_optional(Some(value.into()))
    }

    /// Creates a UniqueId from an optional value, generating one if it is
    /// absent or falsy.
    pub fn from_optional(value: Option<IdValue>) -> Self {
        match value {
            Some(value) if !value.is_falsy() => Self(Identifier::new(value)),
            _ => Self::new(),
        }
    }

    /// Returns the raw wrapped value.
    pub fn to_value(&self) -> &IdValue {
        self.0.to_value()
    }

    /// Returns the underlying base identifier.
    pub fn as_identifier(&self) -> &Identifier<IdValue> {
        &self.0
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::new()
    }
}

impl Identity for UniqueId {
    type Value = IdValue;

    fn to_value(&self) -> &IdValue {
        self.0.to_value()
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Option<IdValue>> for UniqueId {
    fn from(value: Option<IdValue>) -> Self {
        Self::from_optional(value)
    }
}

impl From<UniqueId> for IdValue {
    fn from(id: UniqueId) -> Self {
        id.0.into_value()
    }
}
