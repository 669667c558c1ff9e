//! Pre-edit bounded whole-number filters.
//!
//! Unlike the post-edit normalizers in [`crate::whole`], these gate each edit
//! before it lands:
//!
//! - replacement with a non-digit: rejected
//! - proposed text without any digit: the raw edit is accepted
//! - value within the maximum: the filter writes its own rendering
//! - value over the maximum: rejected, the field keeps its text
//!
//! The plain variant renders canonical digits; the currency variant renders
//! through a [`CurrencyFormat`].
//!
//! # Example
//!
//! ```
//! use numeric_field::bounded::BoundedFilter;
//! use numeric_field::edit::{EditFilter, EditRequest, FilterResult};
//!
//! let plain = BoundedFilter::plain();
//! assert_eq!(plain.filter(&EditRequest::append("12", "3")), FilterResult::Replace("123".into()));
//!
//! let currency = BoundedFilter::currency();
//! assert_eq!(currency.filter(&EditRequest::append("$123", "4")), FilterResult::Replace("$1,234".into()));
//! ```

use crate::currency::CurrencyFormat;
use crate::digits::is_digit_only;
use crate::edit::{EditFilter, EditRequest, FilterResult};
use crate::number::WholeNumber;

/// How an accepted value is written back into the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rendering {
    /// Canonical digits.
    #[default]
    Plain,
    /// Currency symbol and grouped digits.
    Currency(CurrencyFormat),
}

impl Rendering {
    /// Renders `value` for display.
    pub fn render(&self, value: &WholeNumber) -> String {
        match self {
            Self::Plain => value.as_str().to_string(),
            Self::Currency(format) => format.format(value),
        }
    }
}

/// Digit-gated, bounded, self-rendering pre-edit filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedFilter {
    maximum: WholeNumber,
    rendering: Rendering,
}

impl BoundedFilter {
    /// Creates a filter with an explicit bound and rendering.
    pub fn new(maximum: WholeNumber, rendering: Rendering) -> Self {
        Self { maximum, rendering }
    }

    /// Plain digits, default maximum.
    pub fn plain() -> Self {
        Self::new(WholeNumber::max_accepted(), Rendering::Plain)
    }

    /// US currency, default maximum.
    pub fn currency() -> Self {
        Self::new(
            WholeNumber::max_accepted(),
            Rendering::Currency(CurrencyFormat::us()),
        )
    }

    /// Replaces the bound.
    pub fn with_maximum(mut self, maximum: WholeNumber) -> Self {
        self.maximum = maximum;
        self
    }

    /// The inclusive upper bound.
    pub fn maximum(&self) -> &WholeNumber {
        &self.maximum
    }

    /// The rendering used for accepted values.
    pub fn rendering(&self) -> &Rendering {
        &self.rendering
    }
}

impl Default for BoundedFilter {
    fn default() -> Self {
        Self::plain()
    }
}

impl EditFilter for BoundedFilter {
    fn filter(&self, edit: &EditRequest<'_>) -> FilterResult {
        if !is_digit_only(edit.replacement()) {
            return FilterResult::Reject;
        }

        let value = match WholeNumber::parse_lenient(&edit.proposed_text()) {
            Ok(value) => value,
            Err(_) => return FilterResult::AcceptRaw,
        };

        if value > self.maximum {
            FilterResult::Reject
        } else {
            FilterResult::Replace(self.rendering.render(&value))
        }
    }
}
