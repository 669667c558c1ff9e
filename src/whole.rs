//! Post-edit whole-number normalizers.
//!
//! These run after the buffer has changed and rewrite the whole text:
//! non-digits are stripped and the rest is rendered in canonical form.
//! [`normalize_whole_number`] has no upper bound; [`RollbackNormalizer`]
//! restores the last accepted value when the new one is too large.
//!
//! # Example
//!
//! ```
//! use numeric_field::whole::{normalize_whole_number, normalize_with_rollback, LastAccepted};
//! use numeric_field::number::WholeNumber;
//!
//! assert_eq!(normalize_whole_number("0012a3"), "123");
//! assert_eq!(normalize_whole_number("abc"), "");
//!
//! let max = WholeNumber::from(999u64);
//! let mut last = LastAccepted::new();
//! assert_eq!(normalize_with_rollback("999", &mut last, &max), "999");
//! assert_eq!(normalize_with_rollback("9999", &mut last, &max), "999");
//! ```

use crate::edit::ChangeNormalizer;
use crate::number::WholeNumber;

/// Strips non-digits and renders the value canonically; `""` if nothing parses.
pub fn normalize_whole_number(text: &str) -> String {
    match WholeNumber::parse_lenient(text) {
        Ok(value) => value.into_string(),
        Err(_) => String::new(),
    }
}

/// Post-edit hook wrapping [`normalize_whole_number`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeNumberNormalizer;

impl ChangeNormalizer for WholeNumberNormalizer {
    fn normalize(&mut self, text: &str) -> String {
        normalize_whole_number(text)
    }
}

/// The last in-bounds value a rollback field displayed.
///
/// Held by the caller, one per field. Starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastAccepted {
    value: String,
}

impl LastAccepted {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The remembered canonical text (`""` until a value is accepted).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if nothing has been accepted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Normalizes `text`, rolling back to `last` on overflow.
///
/// - parses and fits: remembered and displayed
/// - parses but exceeds `maximum`: the remembered value is displayed
/// - nothing parses: `""` is displayed and `last` is kept
pub fn normalize_with_rollback(
    text: &str,
    last: &mut LastAccepted,
    maximum: &WholeNumber,
) -> String {
    match WholeNumber::parse_lenient(text) {
        Ok(value) if &value <= maximum => {
            last.value = value.into_string();
            last.value.clone()
        }
        Ok(_) => last.value.clone(),
        Err(_) => String::new(),
    }
}

/// Post-edit hook that owns its [`LastAccepted`] and bound.
#[derive(Debug, Clone)]
pub struct RollbackNormalizer {
    maximum: WholeNumber,
    last: LastAccepted,
}

impl RollbackNormalizer {
    /// Creates a normalizer bounded by `maximum`.
    pub fn new(maximum: WholeNumber) -> Self {
        Self {
            maximum,
            last: LastAccepted::new(),
        }
    }

    /// The inclusive upper bound.
    pub fn maximum(&self) -> &WholeNumber {
        &self.maximum
    }

    /// The remembered value.
    pub fn last_accepted(&self) -> &LastAccepted {
        &self.last
    }
}

impl Default for RollbackNormalizer {
    fn default() -> Self {
        Self::new(WholeNumber::max_accepted())
    }
}

impl ChangeNormalizer for RollbackNormalizer {
    fn normalize(&mut self, text: &str) -> String {
        normalize_with_rollback(text, &mut self.last, &self.maximum)
    }
}
