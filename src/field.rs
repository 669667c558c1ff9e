//! An in-memory text field driven by a [`Policy`].
//!
//! [`InputField`] plays the part a UI toolkit normally plays: it owns the
//! text, asks the pre-edit hook about every edit, applies the decision, and
//! runs the post-edit hook when the raw edit went through. Text written by a
//! filter override is treated like a programmatic update and does not
//! trigger the post-edit hook.
//!
//! # Example
//!
//! ```
//! use numeric_field::{InputField, Policy};
//!
//! let mut field = InputField::new(Policy::LeadingZero);
//! field.type_str("005");
//! assert_eq!(field.text(), "5");
//!
//! let mut field = InputField::new(Policy::WholeNumber);
//! field.paste("12a3").unwrap();
//! assert_eq!(field.text(), "123");
//! ```

use crate::edit::{EditRequest, FilterResult};
use crate::error::InputError;
use crate::number::WholeNumber;
use crate::policy::{FieldHooks, Policy};

/// On-screen keyboard shown for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Keyboard {
    /// Full keyboard.
    #[default]
    Default,
    /// Digits only. Other keys cannot be typed, though pasting still works.
    NumberPad,
}

impl Keyboard {
    /// Returns true if the key exists on this keyboard.
    pub fn has_key(&self, key: char) -> bool {
        match self {
            Self::Default => true,
            Self::NumberPad => key.is_ascii_digit(),
        }
    }
}

/// Clipboard and selection actions a field may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Remove the selection onto the clipboard.
    Cut,
    /// Copy the selection.
    Copy,
    /// Insert clipboard contents.
    Paste,
    /// Select the whole text.
    SelectAll,
}

impl EditAction {
    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::SelectAll => "select all",
        }
    }
}

/// What happened to an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The raw edit was applied (and possibly normalized afterwards).
    Accepted,
    /// The filter wrote its own text instead of the raw edit.
    Rewritten,
    /// The edit was dropped.
    Rejected,
}

/// A single text field with a numeric policy attached.
#[derive(Debug)]
pub struct InputField {
    text: String,
    placeholder: String,
    policy: Policy,
    keyboard: Keyboard,
    paste_enabled: bool,
    maximum: WholeNumber,
    hooks: FieldHooks,
}

impl InputField {
    /// Creates an empty field with the default keyboard and maximum.
    pub fn new(policy: Policy) -> Self {
        Self::with_maximum(policy, WholeNumber::max_accepted())
    }

    /// Creates an empty field with a custom maximum for bounded policies.
    pub fn with_maximum(policy: Policy, maximum: WholeNumber) -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            policy,
            keyboard: Keyboard::Default,
            paste_enabled: true,
            hooks: policy.hooks(maximum.clone()),
            maximum,
        }
    }

    /// Creates a field whose hooks are supplied directly.
    pub fn with_hooks(hooks: FieldHooks) -> Self {
        Self {
            hooks,
            ..Self::new(Policy::PassThrough)
        }
    }

    /// Sets the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the keyboard.
    pub fn keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Enables or disables paste. Cut and copy stay available.
    pub fn paste_enabled(mut self, enabled: bool) -> Self {
        self.paste_enabled = enabled;
        self
    }

    /// Current text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder shown while the field is empty.
    #[inline]
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// The attached policy.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The field's keyboard.
    #[inline]
    pub fn keyboard_kind(&self) -> Keyboard {
        self.keyboard
    }

    /// Bound used by bounded policies.
    #[inline]
    pub fn maximum(&self) -> &WholeNumber {
        &self.maximum
    }

    /// Length of the text in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Numeric value of the text, ignoring formatting.
    pub fn value(&self) -> Result<WholeNumber, InputError> {
        WholeNumber::parse_lenient(&self.text)
    }

    /// Returns true if the field offers `action`.
    pub fn can_perform(&self, action: EditAction) -> bool {
        match action {
            EditAction::Cut | EditAction::Copy => true,
            EditAction::Paste | EditAction::SelectAll => self.paste_enabled,
        }
    }

    /// Sets the text directly, the way a program (not the user) would.
    ///
    /// No hook runs.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns what the pre-edit hook would decide, without applying anything.
    pub fn preview(&self, start: usize, length: usize, replacement: &str) -> FilterResult {
        self.hooks
            .check(&EditRequest::new(&self.text, start, length, replacement))
    }

    /// Replaces `length` chars at `start` with `replacement`.
    ///
    /// This is the one path every edit takes.
    pub fn replace_range(&mut self, start: usize, length: usize, replacement: &str) -> EditOutcome {
        let edit = EditRequest::new(&self.text, start, length, replacement);

        match self.hooks.check(&edit) {
            FilterResult::AcceptRaw => {
                let proposed = edit.proposed_text();
                self.text = match self.hooks.normalize(&proposed) {
                    Some(normalized) => normalized,
                    None => proposed,
                };
                crate::field_event!(trace, policy = %self.policy, text = %self.text, "edit accepted");
                EditOutcome::Accepted
            }
            FilterResult::Replace(text) => {
                crate::field_event!(debug, policy = %self.policy, from = %self.text, to = %text, "edit rewritten");
                self.text = text;
                EditOutcome::Rewritten
            }
            FilterResult::Reject => {
                crate::field_event!(debug, policy = %self.policy, replacement, "edit rejected");
                EditOutcome::Rejected
            }
        }
    }

    /// Inserts `text` at char position `at`.
    pub fn insert(&mut self, at: usize, text: &str) -> EditOutcome {
        self.replace_range(at, 0, text)
    }

    /// Types one key with the caret at the end.
    ///
    /// Keys missing from the field's keyboard cannot be pressed and leave the
    /// text untouched.
    pub fn type_char(&mut self, key: char) -> EditOutcome {
        if !self.keyboard.has_key(key) {
            crate::field_event!(trace, %key, "key not on keyboard");
            return EditOutcome::Rejected;
        }
        let mut buf = [0u8; 4];
        let end = self.len();
        self.replace_range(end, 0, key.encode_utf8(&mut buf))
    }

    /// Types each char of `keys` in turn.
    pub fn type_str(&mut self, keys: &str) -> Vec<EditOutcome> {
        keys.chars().map(|key| self.type_char(key)).collect()
    }

    /// Deletes the last char.
    pub fn backspace(&mut self) -> EditOutcome {
        match self.len() {
            0 => EditOutcome::Rejected,
            n => self.replace_range(n - 1, 1, ""),
        }
    }

    /// Deletes everything through the filters, like select-all then delete.
    pub fn clear(&mut self) -> EditOutcome {
        let n = self.len();
        self.replace_range(0, n, "")
    }

    /// Returns `length` chars at `start`.
    pub fn copy(&self, start: usize, length: usize) -> String {
        self.text.chars().skip(start).take(length).collect()
    }

    /// Removes `length` chars at `start`, returning them if the text changed.
    ///
    /// A filter that rewrites the edit back to the same text (the grouping
    /// separator of a currency field, say) leaves nothing removed.
    pub fn cut(&mut self, start: usize, length: usize) -> Option<String> {
        let removed = self.copy(start, length);
        if removed.is_empty() {
            return None;
        }
        let before = self.text.clone();
        match self.replace_range(start, length, "") {
            EditOutcome::Rejected => None,
            _ if self.text == before => None,
            _ => Some(removed),
        }
    }

    /// Pastes `clipboard` at the end of the text.
    ///
    /// Pasting skips the keyboard but not the filters.
    pub fn paste(&mut self, clipboard: &str) -> Result<EditOutcome, InputError> {
        let end = self.len();
        self.paste_at(end, 0, clipboard)
    }

    /// Pastes `clipboard` over `length` chars at `start`.
    pub fn paste_at(
        &mut self,
        start: usize,
        length: usize,
        clipboard: &str,
    ) -> Result<EditOutcome, InputError> {
        if !self.can_perform(EditAction::Paste) {
            return Err(InputError::ActionNotPermitted {
                action: EditAction::Paste,
            });
        }
        Ok(self.replace_range(start, length, clipboard))
    }
}
