//! Arbitrary-precision whole numbers.
//!
//! A [`WholeNumber`] keeps its value as canonical base-10 digits: no leading
//! zeros, and `"0"` for zero. Comparison is exact (digit count first, then
//! digit by digit), so values far beyond 64 bits order correctly and no
//! floating point rounding is involved.
//!
//! # Example
//!
//! ```
//! use numeric_field::number::{WholeNumber, MAX_ACCEPTED};
//!
//! let n: WholeNumber = "000123".parse().unwrap();
//! assert_eq!(n.as_str(), "123");
//!
//! let huge: WholeNumber = "123456789012345678901234567890".parse().unwrap();
//! assert!(huge > WholeNumber::from(MAX_ACCEPTED));
//! ```

use crate::digits::{check_digits, strip_non_digits};
use crate::error::InputError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Largest value the bounded policies accept: 999,999,999,999,999,999.
pub const MAX_ACCEPTED: u64 = 999_999_999_999_999_999;

/// A non-negative integer of arbitrary size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WholeNumber {
    /// Canonical decimal digits, never empty.
    digits: String,
}

impl WholeNumber {
    /// Zero.
    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
        }
    }

    /// The default upper bound, [`MAX_ACCEPTED`].
    pub fn max_accepted() -> Self {
        Self::from(MAX_ACCEPTED)
    }

    /// Parses a string made only of ASCII digits.
    ///
    /// Leading zeros are allowed and dropped. Any other character, including
    /// whitespace or a sign, is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_field::number::WholeNumber;
    /// use numeric_field::InputError;
    ///
    /// assert_eq!(WholeNumber::parse("0042").unwrap().as_str(), "42");
    /// assert_eq!(WholeNumber::parse(""), Err(InputError::Empty));
    /// assert!(WholeNumber::parse("4 2").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        if input.is_empty() {
            return Err(InputError::Empty);
        }

        check_digits(input)?;

        let trimmed = input.trim_start_matches('0');
        if trimmed.is_empty() {
            Ok(Self::zero())
        } else {
            Ok(Self {
                digits: trimmed.to_string(),
            })
        }
    }

    /// Drops every non-digit character, then parses what remains.
    ///
    /// Fails with [`InputError::Empty`] when no digit is left.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_field::number::WholeNumber;
    ///
    /// assert_eq!(WholeNumber::parse_lenient("$1,2a3").unwrap().as_str(), "123");
    /// assert!(WholeNumber::parse_lenient("abc").is_err());
    /// ```
    pub fn parse_lenient(input: &str) -> Result<Self, InputError> {
        Self::parse(&strip_non_digits(input))
    }

    /// Parses and checks the value against an inclusive maximum.
    pub fn parse_bounded(input: &str, maximum: &WholeNumber) -> Result<Self, InputError> {
        let value = Self::parse_lenient(input)?;
        value.check_bound(maximum)
    }

    /// Returns the value if it is at most `maximum`.
    pub fn check_bound(self, maximum: &WholeNumber) -> Result<Self, InputError> {
        if &self > maximum {
            Err(InputError::OutOfRange {
                value: self,
                maximum: maximum.clone(),
            })
        } else {
            Ok(self)
        }
    }

    /// Canonical decimal rendering.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of decimal digits (1 for zero).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Converts to `u64` when the value fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// Consumes the number, returning its canonical digits.
    pub fn into_string(self) -> String {
        self.digits
    }
}

impl Default for WholeNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for WholeNumber {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl FromStr for WholeNumber {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for WholeNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form has no leading zeros, so more digits means larger.
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.as_bytes().cmp(other.digits.as_bytes()))
    }
}

impl PartialOrd for WholeNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WholeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!(WholeNumber::parse("123").unwrap().as_str(), "123");
        assert_eq!(WholeNumber::parse("007").unwrap().as_str(), "7");
        assert_eq!(WholeNumber::parse("0").unwrap().as_str(), "0");
        assert_eq!(WholeNumber::parse("0000").unwrap().as_str(), "0");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(WholeNumber::parse(""), Err(InputError::Empty));
        assert_eq!(WholeNumber::parse_lenient("abc"), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        let err = WholeNumber::parse("12a3").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidCharacter {
                position: 2,
                character: 'a'
            }
        );
        assert!(WholeNumber::parse("-1").is_err());
        assert!(WholeNumber::parse("+1").is_err());
        assert!(WholeNumber::parse("١٢").is_err());
    }

    #[test]
    fn test_parse_lenient_strips() {
        assert_eq!(WholeNumber::parse_lenient("12a3").unwrap().as_str(), "123");
        assert_eq!(WholeNumber::parse_lenient("$1,234").unwrap().as_str(), "1234");
    }

    #[test]
    fn test_arbitrary_precision() {
        let digits = "98765432109876543210987654321098765432109876543210";
        let n = WholeNumber::parse(digits).unwrap();
        assert_eq!(n.as_str(), digits);
        assert_eq!(n.digit_count(), 50);
        assert_eq!(n.to_u64(), None);
    }

    #[test]
    fn test_ordering() {
        let small = WholeNumber::from(9u64);
        let large = WholeNumber::from(10u64);
        assert!(small < large);

        let max = WholeNumber::max_accepted();
        let over: WholeNumber = "1000000000000000000".parse().unwrap();
        assert!(over > max);
        assert_eq!(max.cmp(&WholeNumber::from(MAX_ACCEPTED)), Ordering::Equal);

        let a: WholeNumber = "123456789".parse().unwrap();
        let b: WholeNumber = "123456798".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_check_bound() {
        let max = WholeNumber::from(100u64);
        assert!(WholeNumber::from(100u64).check_bound(&max).is_ok());
        match WholeNumber::from(101u64).check_bound(&max) {
            Err(InputError::OutOfRange { value, maximum }) => {
                assert_eq!(value.as_str(), "101");
                assert_eq!(maximum.as_str(), "100");
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bounded() {
        let max = WholeNumber::max_accepted();
        assert!(WholeNumber::parse_bounded("999999999999999999", &max).is_ok());
        assert!(WholeNumber::parse_bounded("1000000000000000000", &max).is_err());
        assert_eq!(
            WholeNumber::parse_bounded("", &max),
            Err(InputError::Empty)
        );
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(WholeNumber::max_accepted().to_u64(), Some(MAX_ACCEPTED));
        assert_eq!(WholeNumber::zero().to_u64(), Some(0));
        assert!(WholeNumber::zero().is_zero());
    }
}
