//! Fuzz target for currency rendering.
//!
//! Tests that rendering never panics and keeps the digits intact.

#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric_field::{currency::CurrencyFormat, digits::strip_non_digits, WholeNumber};

fuzz_target!(|data: &str| {
    let format = CurrencyFormat::us();
    let _ = format.format_digits(data);

    // Verify roundtrip property
    if let Ok(value) = WholeNumber::parse_lenient(data) {
        let rendered = format.format(&value);
        assert_eq!(strip_non_digits(&rendered), value.as_str(), "Rendering should preserve digits");
        let groups = CurrencyFormat::group_digits(&value);
        assert_eq!(groups.concat(), value.as_str());
    }
});
