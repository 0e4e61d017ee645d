//! Product name value object.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{Guard, GuardResult, Outcome};

/// Minimum length for a product name.
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length for a product name.
pub const MAX_NAME_LENGTH: usize = 50;

const FIELD: &str = "Product name";

/// Validated, immutable product name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Creates a product name, failing if it is blank or outside 3-50 characters.
    pub fn create(name: impl Into<String>) -> Outcome<ProductName> {
        let name = name.into();
        let guard = Self::check(&name);
        if let Some(message) = guard.error() {
            return Outcome::fail(message);
        }
        Outcome::ok(Self(name))
    }

    /// Returns a new name built from `value` under the same rules.
    pub fn rename(&self, value: impl Into<String>) -> Outcome<ProductName> {
        Self::create(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    fn check(name: &str) -> GuardResult {
        Guard::combine([
            Guard::not_empty(name, FIELD),
            Guard::min_length(name, MIN_NAME_LENGTH, FIELD),
            Guard::max_length(name, MAX_NAME_LENGTH, FIELD),
        ])
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
