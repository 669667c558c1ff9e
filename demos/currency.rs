//! Currency field example.
//!
//! Run with: `cargo run --example currency`

use numeric_field::currency::{format_currency, CurrencyFormat};
use numeric_field::{EditOutcome, InputField, Policy, WholeNumber};

fn main() {
    println!("=== Currency Rendering ===\n");

    for value in [0u64, 7, 1234, 1234567, numeric_field::MAX_ACCEPTED] {
        println!("  {:>20} -> {}", value, format_currency(&WholeNumber::from(value)));
    }
    println!();

    // -------------------------------------------------------------------------
    // Typing into a bounded currency field
    // -------------------------------------------------------------------------
    println!("--- Typing with a $10,000 limit ---\n");

    let mut field = InputField::with_maximum(Policy::Currency, WholeNumber::from(10_000u64));
    for key in "100001".chars() {
        let outcome = field.type_char(key);
        let note = match outcome {
            EditOutcome::Rejected => " (dropped)",
            _ => "",
        };
        println!("  type '{}' -> {:<10}{}", key, field.text(), note);
    }
    println!();

    // -------------------------------------------------------------------------
    // Deleting
    // -------------------------------------------------------------------------
    println!("--- Backspace ---\n");

    while !field.is_empty() {
        field.backspace();
        println!("  {:?}", field.text());
    }
    println!();

    // -------------------------------------------------------------------------
    // Custom symbol
    // -------------------------------------------------------------------------
    let format = CurrencyFormat {
        symbol: "CHF ".to_string(),
        grouping_separator: "'".to_string(),
    };
    println!("--- Custom format ---\n");
    println!("  {}", format.format(&WholeNumber::from(1_250_000u64)));
}
