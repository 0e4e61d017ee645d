//! Declarative guards for business invariants.
//!
//! Each guard checks one rule and reports through a [`GuardResult`] instead
//! of returning an error, so entity factories can collect several checks and
//! hand them to [`Guard::combine`]:
//!
//! ```
//! use domain_kernel::domain::foundation::Guard;
//!
//! let name = "Livro";
//! let guard = Guard::combine([
//!     Guard::not_empty(name, "Product name"),
//!     Guard::min_length(name, 3, "Product name"),
//!     Guard::max_length(name, 50, "Product name"),
//! ]);
//! assert!(guard.is_success());
//! ```

use std::fmt;

use super::{GuardResult, Outcome, ValidationError};

/// Namespace for guard predicates.
///
/// String lengths are counted in Unicode scalar values, so a character
/// outside the Basic Multilingual Plane (an emoji such as `😀`) counts once,
/// where a UTF-16 length would count it twice.
pub struct Guard;

impl Guard {
    /// Fails when `value` is absent or contains nothing but whitespace.
    ///
    /// Zero-width characters that are not whitespace (e.g. U+200B) count as content.
    pub fn not_empty<'a>(value: impl Into<Option<&'a str>>, field: &str) -> GuardResult {
        match value.into() {
            Some(s) if !s.trim_matches(is_trimmable).is_empty() => Outcome::success(),
            _ => violation(ValidationError::empty_field(field)),
        }
    }

    /// Fails when `value` is shorter than `min`; a length of exactly `min` passes.
    pub fn min_length(value: &str, min: usize, field: &str) -> GuardResult {
        if value.chars().count() >= min {
            Outcome::success()
        } else {
            violation(ValidationError::too_short(field, min))
        }
    }

    /// Fails when `value` is longer than `max`; a length of exactly `max` passes.
    pub fn max_length(value: &str, max: usize, field: &str) -> GuardResult {
        if value.chars().count() <= max {
            Outcome::success()
        } else {
            violation(ValidationError::too_long(field, max))
        }
    }

    /// Fails when `value` lies outside `min..=max`.
    ///
    /// Values that do not compare (a NaN) fail.
    pub fn is_in_range<N>(value: N, min: N, max: N, field: &str) -> GuardResult
    where
        N: PartialOrd + fmt::Display,
    {
        if value >= min && value <= max {
            Outcome::success()
        } else {
            violation(ValidationError::out_of_range(field, min, max))
        }
    }

    /// Returns the first failure in `results` with its message unchanged,
    /// or a success when every result succeeded (or there were none).
    ///
    /// Scanning stops at the first failure, so a lazy iterator is not
    /// evaluated past it.
    pub fn combine<T, I>(results: I) -> GuardResult
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        results
            .into_iter()
            .find_map(|result| result.error().map(Outcome::fail))
            .unwrap_or_else(Outcome::success)
    }
}

fn violation(err: ValidationError) -> GuardResult {
    Outcome::fail(err.to_string())
}

/// Whitespace removed before the emptiness check: Unicode whitespace plus
/// U+FEFF, except U+0085 (NEL), which counts as content.
fn is_trimmable(c: char) -> bool {
    c != '\u{85}' && (c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ─────────────────────────────────────────────────────────────────────
    // not_empty
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn not_empty_accepts_text() {
        assert!(Guard::not_empty("Livro", "Name").is_success());
    }

    #[test]
    fn not_empty_rejects_blank_and_absent_values() {
        for value in [Some(""), Some("   "), Some("\t\n\r"), None] {
            let result = Guard::not_empty(value, "Name");
            assert_eq!(result.error(), Some("Name should not be empty"));
        }
    }

    #[test]
    fn not_empty_accepts_zero_width_space() {
        assert!(Guard::not_empty("\u{200B}", "Name").is_success());
    }

    #[test]
    fn not_empty_trims_unicode_whitespace() {
        assert!(Guard::not_empty("\u{00A0}\u{3000}\u{FEFF}", "Name").is_failure());
    }

    #[test]
    fn not_empty_keeps_next_line_as_content() {
        assert!(Guard::not_empty("\u{0085}", "Name").is_success());
        assert!(Guard::not_empty(" \u{0085} ", "Name").is_success());
    }

    // ─────────────────────────────────────────────────────────────────────
    // min_length / max_length
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn min_length_is_boundary_inclusive() {
        assert!(Guard::min_length("abc", 3, "F").is_success());
        assert_eq!(
            Guard::min_length("ab", 3, "F").error(),
            Some("F must be at least 3 characters")
        );
    }

    #[test]
    fn max_length_is_boundary_inclusive() {
        assert!(Guard::max_length("abc", 3, "F").is_success());
        assert_eq!(
            Guard::max_length("abcd", 3, "F").error(),
            Some("F must be at most 3 characters")
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert!(Guard::max_length("ção", 3, "F").is_success());
        assert!(Guard::min_length("ção", 3, "F").is_success());
    }

    #[test]
    fn astral_characters_count_once() {
        assert!(Guard::min_length("😀😀", 3, "F").is_failure());
        assert!(Guard::max_length("😀😀", 2, "F").is_success());
    }

    // ─────────────────────────────────────────────────────────────────────
    // is_in_range
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn is_in_range_is_boundary_inclusive() {
        assert!(Guard::is_in_range(1, 1, 10, "Age").is_success());
        assert!(Guard::is_in_range(10, 1, 10, "Age").is_success());
        assert_eq!(
            Guard::is_in_range(0, 1, 10, "Age").error(),
            Some("Age must be between 1 and 10")
        );
        assert!(Guard::is_in_range(11, 1, 10, "Age").is_failure());
    }

    #[test]
    fn is_in_range_supports_negative_and_fractional_values() {
        assert!(Guard::is_in_range(-5, -10, -1, "Delta").is_success());
        assert!(Guard::is_in_range(0.5, 0.0, 1.0, "Ratio").is_success());
        assert_eq!(
            Guard::is_in_range(1.5, 0.25, 1.0, "Ratio").error(),
            Some("Ratio must be between 0.25 and 1")
        );
    }

    #[test]
    fn is_in_range_rejects_nan() {
        assert!(Guard::is_in_range(f64::NAN, 0.0, 1.0, "Ratio").is_failure());
    }

    // ─────────────────────────────────────────────────────────────────────
    // combine
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn combine_returns_first_failure() {
        let result = Guard::combine([
            Outcome::<()>::success(),
            Outcome::fail("E1"),
            Outcome::fail("E2"),
        ]);
        assert_eq!(result.error(), Some("E1"));
    }

    #[test]
    fn combine_succeeds_for_empty_and_all_success() {
        assert!(Guard::combine(Vec::<GuardResult>::new()).is_success());
        assert!(Guard::combine([GuardResult::success(), GuardResult::success()]).is_success());
    }

    #[test]
    fn combine_accepts_outcomes_of_any_value_type() {
        let result = Guard::combine([Outcome::ok(1), Outcome::fail("bad number")]);
        assert_eq!(result.error(), Some("bad number"));
    }

    #[test]
    fn combine_stops_pulling_after_first_failure() {
        let evaluated = Cell::new(0);
        let checks = ["ok", "", "never"].into_iter().map(|value| {
            evaluated.set(evaluated.get() + 1);
            Guard::not_empty(value, "F")
        });

        let result = Guard::combine(checks);

        assert!(result.is_failure());
        assert_eq!(evaluated.get(), 2);
    }
}
