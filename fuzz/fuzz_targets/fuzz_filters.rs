//! Fuzz target for pre-edit filters.
//!
//! Tests that filters never panic and never let a non-digit through.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use numeric_field::{
    bounded::BoundedFilter,
    digits::{filter_digits, is_digit_only},
    edit::{EditFilter, EditRequest, FilterResult},
    leading_zero::suppress_leading_zero,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    current: &'a str,
    start: usize,
    length: usize,
    replacement: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let edit = EditRequest::new(input.current, input.start, input.length, input.replacement);
    let _ = edit.proposed_text();

    let decisions = [
        filter_digits(&edit),
        suppress_leading_zero(&edit),
        BoundedFilter::plain().filter(&edit),
        BoundedFilter::currency().filter(&edit),
    ];

    // A non-digit replacement is always dropped
    if !is_digit_only(input.replacement) {
        for decision in &decisions {
            assert_eq!(decision, &FilterResult::Reject);
        }
    }

    // Digit-only text stays digit-only
    if is_digit_only(input.current) {
        for decision in &decisions[..3] {
            assert!(is_digit_only(&decision.resolve(&edit)));
        }
    }
});
