//! Edit requests, filter decisions, and the two hook shapes.
//!
//! A UI layer owns the text buffer. Before it commits an edit it asks an
//! [`EditFilter`] (the pre-edit hook) for a [`FilterResult`]; after the
//! buffer changed it may hand the full text to a [`ChangeNormalizer`] (the
//! post-edit hook) and display what comes back.
//!
//! # Example
//!
//! ```
//! use numeric_field::edit::{EditFilter, EditRequest, FilterResult};
//! use numeric_field::digits::DigitsOnly;
//!
//! let edit = EditRequest::append("12", "3");
//! assert_eq!(DigitsOnly.filter(&edit), FilterResult::AcceptRaw);
//!
//! let edit = EditRequest::append("12", "x");
//! assert_eq!(DigitsOnly.filter(&edit), FilterResult::Reject);
//! ```

use std::ops::Range;

/// A proposed in-place substring replacement.
///
/// `start` and `length` count chars, not bytes. A range reaching past the
/// end of the text is clamped to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRequest<'a> {
    current: &'a str,
    start: usize,
    length: usize,
    replacement: &'a str,
}

impl<'a> EditRequest<'a> {
    /// Creates a request replacing `length` chars at `start` with `replacement`.
    pub fn new(current: &'a str, start: usize, length: usize, replacement: &'a str) -> Self {
        Self {
            current,
            start,
            length,
            replacement,
        }
    }

    /// Inserts `text` at char position `at`.
    pub fn insert(current: &'a str, at: usize, text: &'a str) -> Self {
        Self::new(current, at, 0, text)
    }

    /// Appends `text` at the end, the way a keystroke with the caret at the end does.
    pub fn append(current: &'a str, text: &'a str) -> Self {
        Self::new(current, current.chars().count(), 0, text)
    }

    /// Deletes `length` chars at `start`.
    pub fn delete(current: &'a str, start: usize, length: usize) -> Self {
        Self::new(current, start, length, "")
    }

    /// The text before the edit.
    #[inline]
    pub fn current(&self) -> &'a str {
        self.current
    }

    /// The text that would replace the range.
    #[inline]
    pub fn replacement(&self) -> &'a str {
        self.replacement
    }

    /// Start of the range, in chars.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the range, in chars.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Byte range of the edited span inside [`current`](Self::current), after clamping.
    pub fn byte_range(&self) -> Range<usize> {
        let start = byte_offset(self.current, self.start);
        let end = byte_offset(self.current, self.start.saturating_add(self.length));
        start..end
    }

    /// The text the field would hold if the raw edit were applied.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_field::edit::EditRequest;
    ///
    /// assert_eq!(EditRequest::new("1234", 1, 2, "9").proposed_text(), "194");
    /// assert_eq!(EditRequest::insert("15", 1, "0").proposed_text(), "105");
    /// ```
    pub fn proposed_text(&self) -> String {
        let range = self.byte_range();
        let mut text = String::with_capacity(
            self.current.len() - (range.end - range.start) + self.replacement.len(),
        );
        text.push_str(&self.current[..range.start]);
        text.push_str(self.replacement);
        text.push_str(&self.current[range.end..]);
        text
    }
}

/// Byte offset of the `chars`-th char, clamped to the end of `text`.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// A pre-edit decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult {
    /// Apply the raw edit unmodified.
    AcceptRaw,
    /// Do not apply the raw edit; the field shows this text instead.
    Replace(String),
    /// Drop the edit; the field keeps its text.
    Reject,
}

impl FilterResult {
    /// The `accept` flag a delegate-style caller returns.
    #[inline]
    pub fn accepts(&self) -> bool {
        matches!(self, Self::AcceptRaw)
    }

    /// Text the filter wrote itself, if any.
    #[inline]
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Self::Replace(text) => Some(text),
            _ => None,
        }
    }

    /// Resolves the decision against `edit`, giving the text the field ends up with.
    pub fn resolve(&self, edit: &EditRequest<'_>) -> String {
        match self {
            Self::AcceptRaw => edit.proposed_text(),
            Self::Replace(text) => text.clone(),
            Self::Reject => edit.current().to_string(),
        }
    }
}

/// Pre-edit hook: decides whether an edit is applied, overridden, or dropped.
pub trait EditFilter {
    /// Inspects a proposed edit.
    fn filter(&self, edit: &EditRequest<'_>) -> FilterResult;
}

impl<F> EditFilter for F
where
    F: Fn(&EditRequest<'_>) -> FilterResult,
{
    fn filter(&self, edit: &EditRequest<'_>) -> FilterResult {
        self(edit)
    }
}

/// Post-edit hook: rewrites the full buffer after it changed.
pub trait ChangeNormalizer {
    /// Returns the text the field should display.
    fn normalize(&mut self, text: &str) -> String;
}

impl<F> ChangeNormalizer for F
where
    F: FnMut(&str) -> String,
{
    fn normalize(&mut self, text: &str) -> String {
        self(text)
    }
}

/// Accepts every edit. Used by fields without a numeric policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl EditFilter for PassThrough {
    fn filter(&self, _edit: &EditRequest<'_>) -> FilterResult {
        FilterResult::AcceptRaw
    }
}
