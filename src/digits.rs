//! Digit-only gating.
//!
//! The simplest policy: an edit is accepted iff every character it inserts
//! is an ASCII digit. Existing text is never touched, and deletions always
//! pass.
//!
//! # Example
//!
//! ```
//! use numeric_field::digits::{filter_digits, is_digit_only, strip_non_digits};
//! use numeric_field::edit::{EditRequest, FilterResult};
//!
//! assert!(is_digit_only("0123"));
//! assert!(!is_digit_only("12.5"));
//!
//! assert_eq!(strip_non_digits("$1,234"), "1234");
//!
//! assert_eq!(filter_digits(&EditRequest::append("1", "2")), FilterResult::AcceptRaw);
//! assert_eq!(filter_digits(&EditRequest::append("1", "a")), FilterResult::Reject);
//! ```

use crate::edit::{EditFilter, EditRequest, FilterResult};
use crate::error::InputError;

/// Returns true if every character is `0`-`9`. The empty string qualifies.
#[inline]
pub fn is_digit_only(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

/// Removes every character that is not `0`-`9`.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checks that `input` is digits only, naming the first offender otherwise.
///
/// # Example
///
/// ```
/// use numeric_field::digits::check_digits;
/// use numeric_field::InputError;
///
/// assert!(check_digits("42").is_ok());
/// assert_eq!(
///     check_digits("4x"),
///     Err(InputError::InvalidCharacter { position: 1, character: 'x' })
/// );
/// ```
pub fn check_digits(input: &str) -> Result<(), InputError> {
    match input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(InputError::InvalidCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Accepts the raw edit iff its replacement is digits only.
pub fn filter_digits(edit: &EditRequest<'_>) -> FilterResult {
    if is_digit_only(edit.replacement()) {
        FilterResult::AcceptRaw
    } else {
        FilterResult::Reject
    }
}

/// Pre-edit hook wrapping [`filter_digits`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitsOnly;

impl EditFilter for DigitsOnly {
    #[inline]
    fn filter(&self, edit: &EditRequest<'_>) -> FilterResult {
        filter_digits(edit)
    }
}
