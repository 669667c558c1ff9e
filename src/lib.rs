//! # numeric_field
//!
//! Strategies for constraining a text input field to numeric content.
//!
//! ## Features
//!
//! - Digit-only gating
//! - Leading-zero suppression
//! - Whole-number normalization, unbounded or with overflow rollback
//! - Bounded whole numbers, plain or rendered as currency
//! - Arbitrary-precision values with exact base-10 comparison
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use numeric_field::{InputField, Policy};
//!
//! // Leading zeros never stick
//! let mut field = InputField::new(Policy::LeadingZero);
//! field.type_str("005");
//! assert_eq!(field.text(), "5");
//!
//! // Non-digits are refused before they land
//! let mut field = InputField::new(Policy::DigitsOnly);
//! field.type_str("1a2");
//! assert_eq!(field.text(), "12");
//!
//! // Currency rendering with a fixed upper bound
//! let mut field = InputField::new(Policy::Currency);
//! field.type_str("1234567");
//! assert_eq!(field.text(), "$1,234,567");
//! ```
//!
//! ## Hooks
//!
//! A UI toolkit talks to the filters through two hook shapes. Pre-edit
//! hooks see the proposed edit and decide; post-edit hooks see the whole
//! buffer after it changed and rewrite it.
//!
//! ```rust
//! use numeric_field::edit::{ChangeNormalizer, EditFilter, EditRequest, FilterResult};
//! use numeric_field::leading_zero::LeadingZeroFilter;
//! use numeric_field::whole::RollbackNormalizer;
//!
//! let edit = EditRequest::append("0", "7");
//! assert_eq!(LeadingZeroFilter.filter(&edit), FilterResult::Replace("7".into()));
//!
//! let mut rollback = RollbackNormalizer::default();
//! assert_eq!(rollback.normalize("999999999999999999"), "999999999999999999");
//! assert_eq!(rollback.normalize("1000000000000000000"), "999999999999999999");
//! ```
//!
//! ## Policies
//!
//! | Policy | Hook | Overflow |
//! |--------|------|----------|
//! | `pass-through` | - | - |
//! | `digits-only` | pre-edit | - |
//! | `leading-zero` | pre-edit | - |
//! | `whole-number` | post-edit | unbounded |
//! | `rollback` | post-edit | restore last value |
//! | `bounded` | pre-edit | drop keystroke |
//! | `currency` | pre-edit | drop keystroke |
//!
//! The default maximum is 999,999,999,999,999,999.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | JSON form configuration |
//! | `tracing` | Field events via `tracing` |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "tracing")]
macro_rules! field_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! field_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use field_event;

pub mod bounded;
pub mod currency;
pub mod digits;
pub mod edit;
pub mod error;
pub mod field;
pub mod form;
pub mod leading_zero;
pub mod number;
pub mod policy;
pub mod stream;
pub mod whole;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use edit::{ChangeNormalizer, EditFilter, EditRequest, FilterResult};
pub use error::InputError;
pub use field::{EditAction, EditOutcome, InputField, Keyboard};
pub use number::{WholeNumber, MAX_ACCEPTED};
pub use policy::{FieldHooks, Policy};

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(policy: Policy, keys: &str) -> String {
        let mut field = InputField::new(policy);
        field.type_str(keys);
        field.text().to_string()
    }

    #[test]
    fn test_every_policy_on_plain_digits() {
        assert_eq!(typed(Policy::PassThrough, "123"), "123");
        assert_eq!(typed(Policy::DigitsOnly, "123"), "123");
        assert_eq!(typed(Policy::LeadingZero, "123"), "123");
        assert_eq!(typed(Policy::WholeNumber, "123"), "123");
        assert_eq!(typed(Policy::Rollback, "123"), "123");
        assert_eq!(typed(Policy::Bounded, "123"), "123");
        assert_eq!(typed(Policy::Currency, "123"), "$123");
    }

    #[test]
    fn test_every_policy_on_letters() {
        assert_eq!(typed(Policy::PassThrough, "a1"), "a1");
        assert_eq!(typed(Policy::DigitsOnly, "a1"), "1");
        assert_eq!(typed(Policy::LeadingZero, "a1"), "1");
        assert_eq!(typed(Policy::WholeNumber, "a1"), "1");
        assert_eq!(typed(Policy::Rollback, "a1"), "1");
        assert_eq!(typed(Policy::Bounded, "a1"), "1");
        assert_eq!(typed(Policy::Currency, "a1"), "$1");
    }

    #[test]
    fn test_leading_zeros_by_policy() {
        // Digit-only gating does not touch zeros
        assert_eq!(typed(Policy::DigitsOnly, "007"), "007");
        assert_eq!(typed(Policy::LeadingZero, "007"), "7");
        assert_eq!(typed(Policy::WholeNumber, "007"), "7");
        assert_eq!(typed(Policy::Bounded, "007"), "7");
    }

    #[test]
    fn test_overflow_by_policy() {
        let max = MAX_ACCEPTED.to_string();
        let over = format!("{}9", max);

        assert_eq!(typed(Policy::WholeNumber, &over), over);
        assert_eq!(typed(Policy::Rollback, &over), max);
        assert_eq!(typed(Policy::Bounded, &over), max);
        assert_eq!(typed(Policy::Currency, &over), "$999,999,999,999,999,999");
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InputField>();
        assert_send_sync::<WholeNumber>();
        assert_send_sync::<InputError>();
        assert_send_sync::<Policy>();
        assert_send_sync::<FilterResult>();
    }
}
