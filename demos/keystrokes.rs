//! Keystroke-by-keystroke policy comparison.
//!
//! Run with: `cargo run --example keystrokes`

use numeric_field::stream::KeystrokeExt;
use numeric_field::{InputField, Keyboard, Policy};

fn main() {
    println!("=== Typing Into Each Policy ===\n");

    let inputs = ["005", "12a3", "0x7", "9999999999999999999"];

    for input in inputs {
        println!("--- Keys: {:?} ---\n", input);
        for policy in Policy::ALL {
            let text = input.chars().map(String::from).final_text(policy);
            println!("  {:<14} {:?}", policy.name(), text);
        }
        println!();
    }

    // -------------------------------------------------------------------------
    // Step by step
    // -------------------------------------------------------------------------
    println!("--- Leading zeros, step by step ---\n");

    for (key, state) in ["0", "0", "5"].iter().zip(["0", "0", "5"].iter().replay(Policy::LeadingZero)) {
        println!("  type {:?} -> {:?}", key, state);
    }
    println!();

    // -------------------------------------------------------------------------
    // Keyboards and paste
    // -------------------------------------------------------------------------
    println!("--- Number pad without paste ---\n");

    let mut field = InputField::new(Policy::PassThrough)
        .placeholder("Number Pad Without Paste")
        .keyboard(Keyboard::NumberPad)
        .paste_enabled(false);

    field.type_str("12ab3");
    println!("  typed \"12ab3\" -> {:?}", field.text());

    match field.paste("hello") {
        Ok(_) => println!("  pasted -> {:?}", field.text()),
        Err(e) => println!("  paste refused: {}", e),
    }
}
