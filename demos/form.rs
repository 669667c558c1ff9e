//! Form configuration example.
//!
//! Run with: `cargo run --example form --features serde`

use numeric_field::form::{Form, FormConfig};

const CONFIG: &str = r#"{
    "fields": [
        { "placeholder": "Quantity", "policy": "leading-zero", "keyboard": "number-pad" },
        { "placeholder": "Price", "policy": "currency", "maximum": "1000000" },
        { "placeholder": "PIN", "policy": "digits-only", "keyboard": "number-pad", "paste": false },
        { "placeholder": "Reference", "policy": "whole-number" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Form From JSON ===\n");

    let config = FormConfig::from_json(CONFIG)?;
    let mut form = Form::build(&config)?;

    let script = [
        ("Quantity", "0042"),
        ("Price", "25000000"),
        ("PIN", "12a34"),
        ("Reference", "00-77-1"),
    ];

    for (name, keys) in script {
        if let Some(field) = form.field_mut(name) {
            field.type_str(keys);
            println!(
                "  {:<10} {:<14} typed {:<10} -> {:?}",
                name,
                field.policy().name(),
                format!("{:?}", keys),
                field.text()
            );
        }
    }

    println!("\n--- Built-in demo form as JSON ---\n");
    println!("{}", FormConfig::demo().to_json()?);

    Ok(())
}
