//! Integration tests for numeric_field.
//!
//! These drive the policies through the public API the way a UI layer
//! would: pre-edit decisions, post-edit normalization, and whole fields.

use numeric_field::{
    bounded::BoundedFilter,
    currency::{format_currency, CurrencyFormat},
    digits::{filter_digits, DigitsOnly},
    edit::{ChangeNormalizer, EditFilter, EditRequest, FilterResult},
    form::{FieldConfig, Form, FormConfig},
    leading_zero::{suppress_leading_zero, LeadingZeroFilter},
    stream::KeystrokeExt,
    whole::{normalize_whole_number, normalize_with_rollback, LastAccepted, RollbackNormalizer},
    EditAction, EditOutcome, InputError, InputField, Keyboard, Policy, WholeNumber, MAX_ACCEPTED,
};

const MAX: &str = "999999999999999999";
const OVER_MAX: &str = "1000000000000000000";

/// Applies a pre-edit filter the way a delegate-style caller does.
fn apply<F: EditFilter>(filter: &F, text: &str, start: usize, length: usize, replacement: &str) -> String {
    let edit = EditRequest::new(text, start, length, replacement);
    filter.filter(&edit).resolve(&edit)
}

// =============================================================================
// DIGIT-ONLY FILTER
// =============================================================================

#[test]
fn test_digits_only_accepts_digit_keystrokes() {
    for key in ["0", "1", "5", "9", "0123456789"] {
        assert_eq!(filter_digits(&EditRequest::append("", key)), FilterResult::AcceptRaw);
    }
}

#[test]
fn test_digits_only_rejects_pasted_letter() {
    let result = DigitsOnly.filter(&EditRequest::append("12", "x"));
    assert_eq!(result, FilterResult::Reject);
    assert!(!result.accepts());
    assert_eq!(result.new_text(), None);
}

#[test]
fn test_digits_only_rejects_signs_and_separators() {
    for key in ["-", "+", ".", ",", " ", "\t", "e", "½", "٣"] {
        assert_eq!(
            DigitsOnly.filter(&EditRequest::append("1", key)),
            FilterResult::Reject,
            "{:?} should be rejected",
            key
        );
    }
}

#[test]
fn test_digits_only_replacing_selection() {
    assert_eq!(apply(&DigitsOnly, "12345", 1, 3, "0"), "105");
    assert_eq!(apply(&DigitsOnly, "12345", 1, 3, "a"), "12345");
}

// =============================================================================
// LEADING-ZERO FILTER
// =============================================================================

#[test]
fn test_leading_zero_typing_zero_zero_five() {
    let mut text = String::new();
    for key in ["0", "0", "5"] {
        text = apply(&LeadingZeroFilter, &text, text.len(), 0, key);
    }
    assert_eq!(text, "5");
}

#[test]
fn test_leading_zero_single_zero() {
    assert_eq!(apply(&LeadingZeroFilter, "", 0, 0, "0"), "0");
}

#[test]
fn test_leading_zero_override_not_raw() {
    let result = suppress_leading_zero(&EditRequest::append("0", "5"));
    assert!(!result.accepts());
    assert_eq!(result.new_text(), Some("5"));
}

#[test]
fn test_leading_zero_no_007_artifact() {
    // Zeros typed in front of a number never stick
    let mut text = "7".to_string();
    for _ in 0..3 {
        text = apply(&LeadingZeroFilter, &text, 0, 0, "0");
    }
    assert_eq!(text, "7");
}

#[test]
fn test_leading_zero_rejects_letters() {
    assert_eq!(apply(&LeadingZeroFilter, "5", 1, 0, "a"), "5");
}

// =============================================================================
// WHOLE-NUMBER NORMALIZER
// =============================================================================

#[test]
fn test_whole_number_strips_non_digits() {
    assert_eq!(normalize_whole_number("12a3"), "123");
}

#[test]
fn test_whole_number_empty() {
    assert_eq!(normalize_whole_number(""), "");
}

#[test]
fn test_whole_number_zero() {
    assert_eq!(normalize_whole_number("0"), "0");
    assert_eq!(normalize_whole_number("0000"), "0");
}

#[test]
fn test_whole_number_has_no_bound() {
    let huge = "1".repeat(100);
    assert_eq!(normalize_whole_number(&huge), huge);
    assert_eq!(normalize_whole_number(OVER_MAX), OVER_MAX);
}

// =============================================================================
// ROLLBACK NORMALIZER
// =============================================================================

#[test]
fn test_rollback_restores_max() {
    let mut hook = RollbackNormalizer::default();
    assert_eq!(hook.normalize(MAX), MAX);
    assert_eq!(hook.normalize(OVER_MAX), MAX);
    assert_eq!(hook.last_accepted().as_str(), MAX);
}

#[test]
fn test_rollback_typing_past_max() {
    let mut field = InputField::new(Policy::Rollback);
    field.type_str(MAX);
    field.type_char('0');
    assert_eq!(field.text(), MAX);
}

#[test]
fn test_rollback_clear_keeps_memory() {
    let mut last = LastAccepted::new();
    let max = WholeNumber::max_accepted();
    normalize_with_rollback("123", &mut last, &max);
    assert_eq!(normalize_with_rollback("abc", &mut last, &max), "");
    assert_eq!(last.as_str(), "123");
}

#[test]
fn test_rollback_initial_overflow_shows_empty() {
    let mut hook = RollbackNormalizer::default();
    assert_eq!(hook.normalize(OVER_MAX), "");
}

// =============================================================================
// BOUNDED FILTERS
// =============================================================================

#[test]
fn test_bounded_drops_keystroke_over_max() {
    let filter = BoundedFilter::plain();
    assert_eq!(apply(&filter, MAX, 18, 0, "0"), MAX);
    assert_eq!(filter.filter(&EditRequest::append(MAX, "0")), FilterResult::Reject);
}

#[test]
fn test_bounded_inserting_in_middle_over_max() {
    let filter = BoundedFilter::plain();
    // 19 digits regardless of position
    assert_eq!(apply(&filter, MAX, 5, 0, "1"), MAX);
}

#[test]
fn test_bounded_replacing_selection_within_max() {
    let filter = BoundedFilter::plain();
    assert_eq!(apply(&filter, MAX, 0, 18, "42"), "42");
}

#[test]
fn test_bounded_always_substitutes_canonical() {
    let filter = BoundedFilter::plain();
    let result = filter.filter(&EditRequest::append("1", "2"));
    assert!(!result.accepts());
    assert_eq!(result.new_text(), Some("12"));
}

#[test]
fn test_currency_renderings() {
    assert_eq!(format_currency(&WholeNumber::from(1234567u64)), "$1,234,567");
    assert_eq!(format_currency(&WholeNumber::from(0u64)), "$0");
    assert_eq!(format_currency(&WholeNumber::from(1234u64)), "$1,234");
}

#[test]
fn test_currency_filter_bound_matches_plain() {
    let plain = BoundedFilter::plain();
    let currency = BoundedFilter::currency();
    let edit = EditRequest::append(MAX, "9");
    assert_eq!(plain.filter(&edit), FilterResult::Reject);
    assert_eq!(
        currency.filter(&EditRequest::append("$999,999,999,999,999,999", "9")),
        FilterResult::Reject
    );
}

#[test]
fn test_currency_rejects_letter() {
    let filter = BoundedFilter::currency();
    assert_eq!(apply(&filter, "$12", 3, 0, "k"), "$12");
}

#[test]
fn test_custom_currency_format() {
    let filter = BoundedFilter::new(
        WholeNumber::from(1_000_000u64),
        numeric_field::bounded::Rendering::Currency(CurrencyFormat {
            symbol: "€".to_string(),
            grouping_separator: ".".to_string(),
        }),
    );
    assert_eq!(apply(&filter, "€1.234", 6, 0, "5"), "€12.345");
}

// =============================================================================
// FIELDS
// =============================================================================

#[test]
fn test_fields_never_hold_non_digits() {
    let noisy = "1a2-3.4 5x6";
    for policy in Policy::ALL.into_iter().filter(Policy::is_digit_constrained) {
        let mut field = InputField::new(policy);
        field.type_str(noisy);
        field.paste(noisy).ok();
        assert!(
            field.text().chars().all(|c| c.is_ascii_digit()),
            "{} left {:?}",
            policy,
            field.text()
        );
    }
}

#[test]
fn test_currency_field_only_formatting_punctuation() {
    let mut field = InputField::new(Policy::Currency);
    field.type_str("98a7b6c5");
    assert_eq!(field.text(), "$98,765");
    assert!(field
        .text()
        .chars()
        .all(|c| c.is_ascii_digit() || c == '$' || c == ','));
}

#[test]
fn test_field_outcomes() {
    let mut field = InputField::new(Policy::Bounded);
    assert_eq!(field.type_char('1'), EditOutcome::Rewritten);
    assert_eq!(field.type_char('x'), EditOutcome::Rejected);

    let mut field = InputField::new(Policy::WholeNumber);
    assert_eq!(field.type_char('x'), EditOutcome::Accepted);
    assert_eq!(field.text(), "");
}

#[test]
fn test_maximum_constant() {
    assert_eq!(MAX_ACCEPTED, 999_999_999_999_999_999);
    assert_eq!(WholeNumber::max_accepted().as_str(), MAX);
}

#[test]
fn test_pasteless_number_pad() {
    let mut form = Form::demo().unwrap();
    let field = form.field_mut("Number Pad Without Paste").unwrap();
    assert_eq!(field.keyboard_kind(), Keyboard::NumberPad);
    field.type_str("12ab");
    assert_eq!(field.text(), "12");
    assert!(matches!(
        field.paste("3"),
        Err(InputError::ActionNotPermitted {
            action: EditAction::Paste
        })
    ));
}

#[test]
fn test_form_from_config() {
    let config = FormConfig {
        fields: vec![
            FieldConfig::new("Amount", Policy::Currency).maximum("10000"),
            FieldConfig::new("Count", Policy::LeadingZero).keyboard(Keyboard::NumberPad),
        ],
    };
    let mut form = Form::build(&config).unwrap();

    let amount = form.field_mut("amount").unwrap();
    amount.type_str("100001");
    assert_eq!(amount.text(), "$10,000");

    let count = form.field_mut("Count").unwrap();
    count.type_str("0042");
    assert_eq!(count.text(), "42");
}

#[test]
fn test_replay_matches_field() {
    let keys = ["0", "0", "5", "a", "3"];
    let states: Vec<_> = keys.iter().replay(Policy::LeadingZero).collect();
    assert_eq!(states, vec!["0", "0", "5", "5", "53"]);
}

#[test]
fn test_closure_hooks_plug_into_fields() {
    let hooks = numeric_field::FieldHooks::pre_edit(|edit: &EditRequest<'_>| {
        if edit.proposed_text().chars().count() > 4 {
            FilterResult::Reject
        } else {
            filter_digits(edit)
        }
    });
    let mut field = InputField::with_hooks(hooks);
    field.type_str("123456");
    assert_eq!(field.text(), "1234");
}

#[test]
fn test_error_messages() {
    let err = WholeNumber::parse_bounded(OVER_MAX, &WholeNumber::max_accepted()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("value {} exceeds maximum {}", OVER_MAX, MAX)
    );
}
