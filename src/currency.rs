//! Currency rendering for whole amounts.
//!
//! A single display rule: no sign, no fraction digits, a currency symbol in
//! front and a grouping separator every three digits, US style.
//!
//! # Example
//!
//! ```
//! use numeric_field::currency::{format_currency, CurrencyFormat};
//! use numeric_field::number::WholeNumber;
//!
//! assert_eq!(format_currency(&WholeNumber::from(1234u64)), "$1,234");
//! assert_eq!(format_currency(&WholeNumber::from(0u64)), "$0");
//!
//! let format = CurrencyFormat::default();
//! assert_eq!(format.format_digits("1234567"), Some("$1,234,567".to_string()));
//! ```

use crate::number::WholeNumber;

/// Digits per group.
const GROUP_SIZE: usize = 3;

/// Symbol and separator used to render amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyFormat {
    /// Written before the amount.
    pub symbol: String,
    /// Written between groups of three digits.
    pub grouping_separator: String,
}

impl CurrencyFormat {
    /// US dollars: `$1,234`.
    pub fn us() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ",".to_string(),
        }
    }

    /// Renders a whole amount.
    pub fn format(&self, value: &WholeNumber) -> String {
        let digits = value.as_str();
        let count = value.digit_count();
        let separators = (count - 1) / GROUP_SIZE;
        let mut result = String::with_capacity(
            self.symbol.len() + count + separators * self.grouping_separator.len(),
        );

        result.push_str(&self.symbol);

        // Length of the leading, possibly short, group
        let head = match count % GROUP_SIZE {
            0 => GROUP_SIZE,
            n => n,
        };

        for (i, c) in digits.chars().enumerate() {
            if i >= head && (i - head) % GROUP_SIZE == 0 {
                result.push_str(&self.grouping_separator);
            }
            result.push(c);
        }

        result
    }

    /// Renders any text holding at least one digit, ignoring everything else.
    ///
    /// Returns `None` when there is no digit to render.
    pub fn format_digits(&self, input: &str) -> Option<String> {
        WholeNumber::parse_lenient(input)
            .ok()
            .map(|value| self.format(&value))
    }

    /// Splits the rendering of `value` into its digit groups.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_field::currency::CurrencyFormat;
    /// use numeric_field::number::WholeNumber;
    ///
    /// let value = WholeNumber::from(1234567u64);
    /// let groups = CurrencyFormat::group_digits(&value);
    /// assert_eq!(groups, vec!["1", "234", "567"]);
    /// ```
    pub fn group_digits(value: &WholeNumber) -> Vec<&str> {
        let digits = value.as_str();
        let head = match digits.len() % GROUP_SIZE {
            0 => GROUP_SIZE,
            n => n,
        };

        let mut groups = Vec::with_capacity(digits.len() / GROUP_SIZE + 1);
        groups.push(&digits[..head]);
        let mut pos = head;
        while pos < digits.len() {
            groups.push(&digits[pos..pos + GROUP_SIZE]);
            pos += GROUP_SIZE;
        }
        groups
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::us()
    }
}

/// Renders `value` with the default (US) format.
pub fn format_currency(value: &WholeNumber) -> String {
    CurrencyFormat::us().format(value)
}
