//! Leading-zero suppression.
//!
//! Digit-gated like [`crate::digits`], then the proposed text is checked for
//! leading zeros:
//!
//! - all zeros (`"00"`, `"000"`) collapse to `"0"`
//! - otherwise exactly one leading zero is dropped (`"05"` becomes `"5"`)
//!
//! When the text is corrected the filter answers with
//! [`FilterResult::Replace`], so the caller shows the corrected text and
//! skips the raw edit. Typing `0`, `0`, `5` into an empty field ends at `"5"`.
//!
//! # Example
//!
//! ```
//! use numeric_field::leading_zero::suppress_leading_zero;
//! use numeric_field::edit::{EditRequest, FilterResult};
//!
//! assert_eq!(suppress_leading_zero(&EditRequest::append("", "0")), FilterResult::Replace("0".into()));
//! assert_eq!(suppress_leading_zero(&EditRequest::append("0", "5")), FilterResult::Replace("5".into()));
//! assert_eq!(suppress_leading_zero(&EditRequest::append("5", "0")), FilterResult::AcceptRaw);
//! ```

use crate::digits::is_digit_only;
use crate::edit::{EditFilter, EditRequest, FilterResult};

/// Returns the corrected text if `proposed` has a leading-zero problem.
///
/// `None` means the text is fine as it is.
///
/// # Example
///
/// ```
/// use numeric_field::leading_zero::correct_leading_zero;
///
/// assert_eq!(correct_leading_zero("000"), Some("0".to_string()));
/// assert_eq!(correct_leading_zero("007"), Some("07".to_string()));
/// assert_eq!(correct_leading_zero("70"), None);
/// assert_eq!(correct_leading_zero(""), None);
/// ```
pub fn correct_leading_zero(proposed: &str) -> Option<String> {
    if !proposed.is_empty() && proposed.bytes().all(|b| b == b'0') {
        return Some("0".to_string());
    }

    proposed.strip_prefix('0').map(str::to_string)
}

/// Digit gate plus leading-zero correction.
pub fn suppress_leading_zero(edit: &EditRequest<'_>) -> FilterResult {
    if !is_digit_only(edit.replacement()) {
        return FilterResult::Reject;
    }

    match correct_leading_zero(&edit.proposed_text()) {
        Some(corrected) => FilterResult::Replace(corrected),
        None => FilterResult::AcceptRaw,
    }
}

/// Pre-edit hook wrapping [`suppress_leading_zero`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingZeroFilter;

impl EditFilter for LeadingZeroFilter {
    #[inline]
    fn filter(&self, edit: &EditRequest<'_>) -> FilterResult {
        suppress_leading_zero(edit)
    }
}
