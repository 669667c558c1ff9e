//! Fuzz target for whole-number parsing and normalization.
//!
//! Tests that parsing never panics and normalization is a fixed point.

#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric_field::{
    whole::{normalize_whole_number, normalize_with_rollback, LastAccepted},
    WholeNumber,
};

fuzz_target!(|data: &str| {
    let _ = WholeNumber::parse(data);
    let _ = WholeNumber::parse_lenient(data);

    let once = normalize_whole_number(data);
    assert_eq!(normalize_whole_number(&once), once, "Normalization should be idempotent");

    let max = WholeNumber::max_accepted();
    let mut last = LastAccepted::new();
    let shown = normalize_with_rollback(data, &mut last, &max);
    if let Ok(value) = WholeNumber::parse(&shown) {
        assert!(value <= max, "Rollback should never show a value over the maximum");
    }
});
