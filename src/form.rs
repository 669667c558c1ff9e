//! Declarative form layouts.
//!
//! A [`FormConfig`] lists fields with their placeholder, policy, keyboard,
//! paste permission and optional maximum. [`Form::build`] turns it into live
//! [`InputField`]s.
//!
//! # Feature
//!
//! Loading configs from JSON requires the `serde` feature.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "fields": [
//!     { "placeholder": "Quantity", "policy": "leading-zero", "keyboard": "number-pad" },
//!     { "placeholder": "Price", "policy": "currency", "maximum": "1000000" },
//!     { "placeholder": "PIN", "policy": "digits-only", "paste": false }
//!   ]
//! }
//! ```

use crate::field::{InputField, Keyboard};
use crate::number::WholeNumber;
use crate::policy::Policy;
use std::fmt;

/// One field in a form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    /// Placeholder, also used to look the field up.
    pub placeholder: String,

    /// Attached policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: Policy,

    /// On-screen keyboard.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keyboard: Keyboard,

    /// Whether paste is offered.
    #[cfg_attr(feature = "serde", serde(default = "default_paste"))]
    pub paste: bool,

    /// Maximum for bounded policies, as decimal digits.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub maximum: Option<String>,
}

#[cfg(feature = "serde")]
fn default_paste() -> bool {
    true
}

impl FieldConfig {
    /// A field with the given placeholder and policy, default everything else.
    pub fn new(placeholder: impl Into<String>, policy: Policy) -> Self {
        Self {
            placeholder: placeholder.into(),
            policy,
            keyboard: Keyboard::Default,
            paste: true,
            maximum: None,
        }
    }

    /// Sets the keyboard.
    pub fn keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Enables or disables paste.
    pub fn paste(mut self, enabled: bool) -> Self {
        self.paste = enabled;
        self
    }

    /// Sets the maximum.
    pub fn maximum(mut self, maximum: impl Into<String>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }

    /// Resolves the configured maximum, falling back to the default bound.
    pub fn resolved_maximum(&self) -> Result<WholeNumber, ConfigError> {
        match &self.maximum {
            None => Ok(WholeNumber::max_accepted()),
            Some(raw) => WholeNumber::parse(raw.trim()).map_err(|e| ConfigError::InvalidMaximum {
                field: self.placeholder.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Builds the live field.
    pub fn build(&self) -> Result<InputField, ConfigError> {
        Ok(InputField::with_maximum(self.policy, self.resolved_maximum()?)
            .placeholder(self.placeholder.clone())
            .keyboard(self.keyboard)
            .paste_enabled(self.paste))
    }
}

/// A list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormConfig {
    /// Fields, top to bottom.
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    /// The showcase screen: one field per strategy.
    pub fn demo() -> Self {
        Self {
            fields: vec![
                FieldConfig::new("Default TextField", Policy::PassThrough),
                FieldConfig::new("Number Pad Only", Policy::PassThrough)
                    .keyboard(Keyboard::NumberPad),
                FieldConfig::new("Number Pad Without Paste", Policy::PassThrough)
                    .keyboard(Keyboard::NumberPad)
                    .paste(false),
                FieldConfig::new("With Simple Delegate Filter", Policy::DigitsOnly),
                FieldConfig::new("With Target Editing", Policy::WholeNumber),
                FieldConfig::new("With Complex Delegate Filter", Policy::LeadingZero),
                FieldConfig::new("With Overflow Rollback", Policy::Rollback),
                FieldConfig::new("With Bounded Filter", Policy::Bounded),
                FieldConfig::new("With Currency Format", Policy::Currency),
            ],
        }
    }

    /// Checks every field, reporting the first problem.
    ///
    /// Placeholders must be unique ignoring ASCII case, as fields are looked up that way.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if field.placeholder.trim().is_empty() {
                return Err(ConfigError::MissingPlaceholder);
            }
            if !seen.insert(field.placeholder.to_ascii_lowercase()) {
                return Err(ConfigError::DuplicateField(field.placeholder.clone()));
            }
            field.resolved_maximum()?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl FormConfig {
    /// Loads a config from a JSON file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads a config from a reader.
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json(&content)
    }

    /// Parses a config from a JSON string and validates it.
    ///
    /// # Example
    ///
    /// ```
    /// use numeric_field::form::FormConfig;
    /// use numeric_field::Policy;
    ///
    /// let config = FormConfig::from_json(r#"{"fields": [{"placeholder": "Qty", "policy": "bounded"}]}"#).unwrap();
    /// assert_eq!(config.fields[0].policy, Policy::Bounded);
    /// assert!(config.fields[0].paste);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Live fields built from a [`FormConfig`].
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<InputField>,
}

impl Form {
    /// Builds every field of `config`.
    pub fn build(config: &FormConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fields = config
            .fields
            .iter()
            .map(FieldConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    /// Builds the showcase form from [`FormConfig::demo`].
    pub fn demo() -> Result<Self, ConfigError> {
        Self::build(&FormConfig::demo())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields.
    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    /// Looks a field up by placeholder, ignoring ASCII case.
    pub fn field(&self, placeholder: &str) -> Option<&InputField> {
        self.fields
            .iter()
            .find(|f| f.placeholder_text().eq_ignore_ascii_case(placeholder))
    }

    /// Mutable lookup by placeholder.
    pub fn field_mut(&mut self, placeholder: &str) -> Option<&mut InputField> {
        self.fields
            .iter_mut()
            .find(|f| f.placeholder_text().eq_ignore_ascii_case(placeholder))
    }

    /// Mutable access by position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut InputField> {
        self.fields.get_mut(index)
    }
}

/// Errors from building or loading a form.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the config.
    Io(std::io::Error),
    /// The config could not be parsed.
    Parse(String),
    /// A field has an empty placeholder.
    MissingPlaceholder,
    /// Two fields share a placeholder.
    DuplicateField(String),
    /// A field's maximum is not a whole number.
    InvalidMaximum {
        /// Placeholder of the offending field.
        field: String,
        /// Why the maximum was refused.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Parse(msg) => write!(f, "parse error: {}", msg),
            Self::MissingPlaceholder => write!(f, "field has no placeholder"),
            Self::DuplicateField(name) => write!(f, "duplicate field '{}'", name),
            Self::InvalidMaximum { field, reason } => {
                write!(f, "invalid maximum for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
