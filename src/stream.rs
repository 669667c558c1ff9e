//! Keystroke replay over iterators.
//!
//! Feeds an iterator of keystrokes into a fresh [`InputField`] and yields the
//! field text after each one. Handy for testing policies against recorded
//! input and for the CLI.
//!
//! Each item is delivered as one edit at the end of the text, so a
//! multi-char item behaves like a paste through the filters.
//!
//! # Example
//!
//! ```
//! use numeric_field::stream::KeystrokeExt;
//! use numeric_field::Policy;
//!
//! let states: Vec<String> = ["0", "0", "5"].iter().replay(Policy::LeadingZero).collect();
//! assert_eq!(states, vec!["0", "0", "5"]);
//!
//! let last = "12a3".chars().map(String::from).final_text(Policy::DigitsOnly);
//! assert_eq!(last, "123");
//! ```

use crate::field::InputField;
use crate::policy::Policy;

/// Replays keystrokes into a field, yielding the text after each.
///
/// This struct is created by the `replay` method on iterators.
#[derive(Debug)]
pub struct ReplayStream<I> {
    inner: I,
    field: InputField,
}

impl<I> ReplayStream<I> {
    /// Creates a stream replaying into `field`.
    #[inline]
    pub fn new(inner: I, field: InputField) -> Self {
        Self { inner, field }
    }

    /// The field being typed into.
    #[inline]
    pub fn field(&self) -> &InputField {
        &self.field
    }

    /// Consumes the stream and returns the field.
    #[inline]
    pub fn into_field(self) -> InputField {
        self.field
    }
}

impl<I, S> Iterator for ReplayStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.next()?;
        let end = self.field.len();
        self.field.replace_range(end, 0, key.as_ref());
        Some(self.field.text().to_string())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ReplayStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

/// Extension trait adding keystroke replay to iterators.
pub trait KeystrokeExt: Iterator + Sized {
    /// Replays every item into a new field with `policy`.
    fn replay(self, policy: Policy) -> ReplayStream<Self> {
        ReplayStream::new(self, InputField::new(policy))
    }

    /// Replays every item into `field`.
    fn replay_into(self, field: InputField) -> ReplayStream<Self> {
        ReplayStream::new(self, field)
    }

    /// Replays everything and returns the final text.
    fn final_text(self, policy: Policy) -> String
    where
        Self::Item: AsRef<str>,
    {
        let mut stream = self.replay(policy);
        stream.by_ref().for_each(drop);
        stream.into_field().text().to_string()
    }
}

impl<I: Iterator> KeystrokeExt for I {}
