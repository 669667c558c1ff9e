//! Error types for numeric input handling.
//!
//! Filters themselves never fail: a parse failure or a bound violation is
//! turned into a text-state transition. These errors are returned by the
//! explicit parsing helpers and by clipboard operations on a field.

use crate::field::EditAction;
use crate::number::WholeNumber;
use std::fmt;

/// Errors that can occur while parsing or editing numeric input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// There were no digits to parse.
    Empty,

    /// A character other than `0`-`9` was found.
    InvalidCharacter {
        /// The position in the input (0-indexed, in chars).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The parsed value is larger than the accepted maximum.
    OutOfRange {
        /// The value that was parsed.
        value: WholeNumber,
        /// The largest accepted value.
        maximum: WholeNumber,
    },

    /// The field does not allow this edit action.
    ActionNotPermitted {
        /// The refused action.
        action: EditAction,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input contains no digits"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::OutOfRange { value, maximum } => {
                write!(f, "value {} exceeds maximum {}", value, maximum)
            }

            Self::ActionNotPermitted { action } => {
                write!(f, "{} is not permitted on this field", action.name())
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(InputError::Empty.to_string(), "input contains no digits");

        assert_eq!(
            InputError::InvalidCharacter {
                position: 2,
                character: 'a'
            }
            .to_string(),
            "invalid character 'a' at position 2 (only digits allowed)"
        );

        assert_eq!(
            InputError::OutOfRange {
                value: WholeNumber::from(1_000u64),
                maximum: WholeNumber::from(999u64),
            }
            .to_string(),
            "value 1000 exceeds maximum 999"
        );

        assert_eq!(
            InputError::ActionNotPermitted {
                action: EditAction::Paste
            }
            .to_string(),
            "paste is not permitted on this field"
        );
    }

    #[test]
    fn test_error_escapes_control_characters() {
        let err = InputError::InvalidCharacter {
            position: 0,
            character: '\n',
        };
        assert!(err.to_string().contains("'\\n'"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InputError>();
    }
}
