//! WebAssembly bindings for numeric input filtering.
//!
//! Lets a browser `<input>` run the same policies as native code.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { NumericInput, format_currency } from 'numeric_field';
//!
//! await init();
//!
//! const field = new NumericInput("leading-zero");
//! input.addEventListener("beforeinput", (e) => {
//!     const { selectionStart, selectionEnd } = input;
//!     field.replace(selectionStart, selectionEnd - selectionStart, e.data ?? "");
//!     input.value = field.text;
//!     e.preventDefault();
//! });
//!
//! format_currency("1234567"); // "$1,234,567"
//! ```

#![cfg(feature = "wasm")]

use crate::field::{EditOutcome, InputField};
use crate::number::WholeNumber;
use crate::policy::Policy;
use wasm_bindgen::prelude::*;

/// A text field with a policy attached, driven from JavaScript.
#[wasm_bindgen]
pub struct NumericInput {
    field: InputField,
}

#[wasm_bindgen]
impl NumericInput {
    /// Creates a field for the named policy (e.g. `"currency"`).
    #[wasm_bindgen(constructor)]
    pub fn new(policy: &str) -> Result<NumericInput, JsValue> {
        let policy: Policy = policy
            .parse()
            .map_err(|e: crate::policy::UnknownPolicy| JsValue::from_str(&e.to_string()))?;
        Ok(NumericInput {
            field: InputField::new(policy),
        })
    }

    /// Current text.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.field.text().to_string()
    }

    /// Name of the attached policy.
    #[wasm_bindgen(getter)]
    pub fn policy(&self) -> String {
        self.field.policy().name().to_string()
    }

    /// Applies an edit; returns false if it was dropped.
    pub fn replace(&mut self, start: usize, length: usize, replacement: &str) -> bool {
        self.field.replace_range(start, length, replacement) != EditOutcome::Rejected
    }

    /// Types each char at the end of the text.
    pub fn type_text(&mut self, keys: &str) {
        self.field.type_str(keys);
    }

    /// Deletes the last char.
    pub fn backspace(&mut self) {
        self.field.backspace();
    }

    /// Replays keystrokes from a JS array of strings, returning the text after each.
    pub fn replay(&mut self, keys: js_sys::Array) -> js_sys::Array {
        let states = js_sys::Array::new();

        for key in keys.iter() {
            if let Some(key) = key.as_string() {
                let end = self.field.len();
                self.field.replace_range(end, 0, &key);
                states.push(&JsValue::from_str(self.field.text()));
            }
        }

        states
    }
}

/// Checks whether a string is digits only.
#[wasm_bindgen]
pub fn is_digit_only(input: &str) -> bool {
    crate::digits::is_digit_only(input)
}

/// Renders the digits of `input` as US currency, or `undefined` if there are none.
#[wasm_bindgen]
pub fn format_currency(input: &str) -> Option<String> {
    WholeNumber::parse_lenient(input)
        .ok()
        .map(|value| crate::currency::format_currency(&value))
}

/// Canonical whole-number rendering of `input` (`""` if no digits).
#[wasm_bindgen]
pub fn normalize_whole_number(input: &str) -> String {
    crate::whole::normalize_whole_number(input)
}

/// Names of all policies.
#[wasm_bindgen]
pub fn policies() -> js_sys::Array {
    Policy::ALL
        .iter()
        .map(|p| JsValue::from_str(p.name()))
        .collect()
}
