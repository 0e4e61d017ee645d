//! Explicit success/failure outcome for expected business-rule checks.

use super::{DomainError, RetrievalError};

/// Result of an operation that can fail for an expected business reason.
///
/// Exactly one of success or failure holds. A success may be valueless, and
/// reading the value of a valueless success is treated the same as reading
/// the value of a failure: both yield [`RetrievalError`].
///
/// Outcomes are only built through [`Outcome::ok`], [`Outcome::success`] and
/// [`Outcome::fail`], and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    value: Option<T>,
    error: Option<String>,
}

/// Outcome produced by a single guard predicate.
pub type GuardResult = Outcome<()>;

impl<T> Outcome<T> {
    /// Creates a successful outcome wrapping `value`.
    ///
    /// Falsy-looking values (`0`, `""`, `false`, `None` as `T = Option<_>`)
    /// are values like any other and can be read back.
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// Creates a successful outcome without a value.
    pub fn success() -> Self {
        Self {
            value: None,
            error: None,
        }
    }

    /// Creates a failed outcome carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            value: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the wrapped value.
    ///
    /// # Errors
    ///
    /// [`RetrievalError`] if the outcome failed or succeeded without a value.
    pub fn value(&self) -> Result<&T, RetrievalError> {
        match (&self.error, &self.value) {
            (None, Some(value)) => Ok(value),
            _ => Err(RetrievalError),
        }
    }

    /// Consumes the outcome and returns the wrapped value.
    ///
    /// # Errors
    ///
    /// [`RetrievalError`] under the same conditions as [`Outcome::value`].
    pub fn into_value(self) -> Result<T, RetrievalError> {
        match (self.error, self.value) {
            (None, Some(value)) => Ok(value),
            _ => Err(RetrievalError),
        }
    }

    /// Returns the failure message, or `None` for a success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Bridges into a `Result` for `?` propagation.
    ///
    /// Failures become `ValidationFailed` domain errors with the message
    /// unchanged; a valueless success becomes a `ValueRetrieval` error.
    pub fn into_result(self) -> Result<T, DomainError> {
        match (self.error, self.value) {
            (Some(message), _) => Err(DomainError::validation(message)),
            (None, Some(value)) => Ok(value),
            (None, None) => Err(RetrievalError.into()),
        }
    }
}
