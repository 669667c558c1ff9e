//! Named input policies and the hooks they attach to a field.
//!
//! | Policy | Hook | Behavior |
//! |--------|------|----------|
//! | `pass-through` | - | accepts anything |
//! | `digits-only` | pre-edit | rejects non-digit input |
//! | `leading-zero` | pre-edit | digits only, no leading zeros |
//! | `whole-number` | post-edit | canonical whole number, unbounded |
//! | `rollback` | post-edit | canonical, restores last value on overflow |
//! | `bounded` | pre-edit | canonical, drops keystrokes over the maximum |
//! | `currency` | pre-edit | like `bounded`, rendered as `$1,234` |

use crate::bounded::BoundedFilter;
use crate::digits::DigitsOnly;
use crate::edit::{ChangeNormalizer, EditFilter, EditRequest, FilterResult, PassThrough};
use crate::leading_zero::LeadingZeroFilter;
use crate::number::WholeNumber;
use crate::whole::{RollbackNormalizer, WholeNumberNormalizer};
use std::fmt;
use std::str::FromStr;

/// A strategy for constraining a field to numeric content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Policy {
    /// No filtering.
    #[default]
    PassThrough,
    /// Digit-only gate.
    DigitsOnly,
    /// Digit gate plus leading-zero suppression.
    LeadingZero,
    /// Post-edit canonical whole number.
    WholeNumber,
    /// Post-edit canonical whole number with overflow rollback.
    Rollback,
    /// Pre-edit bounded whole number.
    Bounded,
    /// Pre-edit bounded whole number rendered as currency.
    Currency,
}

impl Policy {
    /// Every policy, in table order.
    pub const ALL: [Policy; 7] = [
        Policy::PassThrough,
        Policy::DigitsOnly,
        Policy::LeadingZero,
        Policy::WholeNumber,
        Policy::Rollback,
        Policy::Bounded,
        Policy::Currency,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass-through",
            Self::DigitsOnly => "digits-only",
            Self::LeadingZero => "leading-zero",
            Self::WholeNumber => "whole-number",
            Self::Rollback => "rollback",
            Self::Bounded => "bounded",
            Self::Currency => "currency",
        }
    }

    /// One-line description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PassThrough => "accepts any input",
            Self::DigitsOnly => "rejects edits that insert non-digits",
            Self::LeadingZero => "digits only, leading zeros suppressed",
            Self::WholeNumber => "rewrites the text as a whole number after each change",
            Self::Rollback => "whole number, restores the last value on overflow",
            Self::Bounded => "whole number, drops keystrokes over the maximum",
            Self::Currency => "bounded whole number shown as currency",
        }
    }

    /// Returns true if the policy uses the maximum bound.
    pub const fn is_bounded(&self) -> bool {
        matches!(self, Self::Rollback | Self::Bounded | Self::Currency)
    }

    /// Returns true if the displayed text is digits only (or empty).
    pub const fn is_digit_constrained(&self) -> bool {
        !matches!(self, Self::PassThrough | Self::Currency)
    }

    /// Builds the hooks for one field.
    ///
    /// `maximum` is ignored by unbounded policies.
    pub fn hooks(&self, maximum: WholeNumber) -> FieldHooks {
        match self {
            Self::PassThrough => FieldHooks::pre_edit(PassThrough),
            Self::DigitsOnly => FieldHooks::pre_edit(DigitsOnly),
            Self::LeadingZero => FieldHooks::pre_edit(LeadingZeroFilter),
            Self::WholeNumber => FieldHooks::post_edit(WholeNumberNormalizer),
            Self::Rollback => FieldHooks::post_edit(RollbackNormalizer::new(maximum)),
            Self::Bounded => FieldHooks::pre_edit(BoundedFilter::plain().with_maximum(maximum)),
            Self::Currency => {
                FieldHooks::pre_edit(BoundedFilter::currency().with_maximum(maximum))
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy '{}'", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}

/// The pre-edit and post-edit hooks attached to one field.
pub struct FieldHooks {
    pre_edit: Option<Box<dyn EditFilter + Send + Sync>>,
    post_edit: Option<Box<dyn ChangeNormalizer + Send + Sync>>,
}

impl FieldHooks {
    /// No hooks at all.
    pub fn none() -> Self {
        Self {
            pre_edit: None,
            post_edit: None,
        }
    }

    /// A single pre-edit hook.
    pub fn pre_edit<F>(filter: F) -> Self
    where
        F: EditFilter + Send + Sync + 'static,
    {
        Self {
            pre_edit: Some(Box::new(filter)),
            post_edit: None,
        }
    }

    /// A single post-edit hook.
    pub fn post_edit<N>(normalizer: N) -> Self
    where
        N: ChangeNormalizer + Send + Sync + 'static,
    {
        Self {
            pre_edit: None,
            post_edit: Some(Box::new(normalizer)),
        }
    }

    /// Adds a post-edit hook alongside the existing pre-edit hook.
    pub fn and_post_edit<N>(mut self, normalizer: N) -> Self
    where
        N: ChangeNormalizer + Send + Sync + 'static,
    {
        self.post_edit = Some(Box::new(normalizer));
        self
    }

    /// Returns true if a pre-edit hook is attached.
    pub fn has_pre_edit(&self) -> bool {
        self.pre_edit.is_some()
    }

    /// Returns true if a post-edit hook is attached.
    pub fn has_post_edit(&self) -> bool {
        self.post_edit.is_some()
    }

    /// Asks the pre-edit hook about `edit`. Without one, the raw edit is accepted.
    pub fn check(&self, edit: &EditRequest<'_>) -> FilterResult {
        match &self.pre_edit {
            Some(filter) => filter.filter(edit),
            None => FilterResult::AcceptRaw,
        }
    }

    /// Runs the post-edit hook, if any, over `text`.
    pub fn normalize(&mut self, text: &str) -> Option<String> {
        self.post_edit
            .as_mut()
            .map(|normalizer| normalizer.normalize(text))
    }
}

impl fmt::Debug for FieldHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHooks")
            .field("pre_edit", &self.has_pre_edit())
            .field("post_edit", &self.has_post_edit())
            .finish()
    }
}
