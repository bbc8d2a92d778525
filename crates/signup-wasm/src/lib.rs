//! Sign-up Validation WASM
//!
//! WebAssembly bindings for the sign-up schema.
//! The browser runs the same rules as the server, per keystroke or blur.

use serde::Serialize;
use signup_validation::{self as core, Field, FormValues};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a whole form
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateSignup({
///     firstName: 'Ada',
///     lastName: '',
///     email: 'ada@example.com',
///     password: 'longenough'
/// });
/// // { lastName: "Last Name cannot be empty" }
/// ```
#[wasm_bindgen(js_name = validateSignup)]
pub fn validate_signup(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    // Plain object rather than a JS Map, keyed by field name
    let errors = core::validate(&values);
    Ok(errors.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validate a single field, returning its message or `undefined`
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<Option<String>, JsValue> {
    let field: Field = field_name
        .parse()
        .map_err(|e: core::SignupError| JsValue::from_str(&e.to_string()))?;

    Ok(core::validate_field(field, value).err().map(|failure| failure.message))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}
