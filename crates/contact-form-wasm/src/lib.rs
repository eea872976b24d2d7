//! Contact Form WASM
//!
//! WebAssembly bindings for the contact form validator.
//! Binds the controller to the page's `#contactForm` and exposes the same
//! validators to JavaScript.

use contact_form_validation as core;
use contact_form_validation::{ContactFormValues, FormConfig};
use tracing::Level;
use wasm_bindgen::prelude::*;

pub mod dom;
mod logging;

/// Install panic hook and console logging, then bind the form on load
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init(Level::INFO);

    #[cfg(feature = "auto-attach")]
    dom::attach_on_ready()?;

    Ok(())
}

/// Bind the validator to a form with an explicit config
///
/// # Returns
/// `true` if the form was found and bound, `false` if it is absent or already bound
///
/// # Example (JavaScript)
/// ```javascript
/// attachContactForm({ formId: 'signup', resetDelayMs: 5000 });
/// ```
#[wasm_bindgen(js_name = attachContactForm)]
pub fn attach_contact_form(config: JsValue) -> Result<bool, JsValue> {
    let config: FormConfig = if config.is_undefined() || config.is_null() {
        FormConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    Ok(dom::attach(&document, config)?.is_some())
}

/// Validate a snapshot of the form values
///
/// # Returns
/// Array of `{ field, message }` in field order (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateContactForm({
///     firstName: 'john', lastName: 'doe', city: 'austin',
///     email: 'j@d.com', zipCode: '78701'
/// });
/// ```
#[wasm_bindgen(js_name = validateContactForm)]
pub fn validate_contact_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: ContactFormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    let report = core::validate_submission(&values);
    Ok(serde_wasm_bindgen::to_value(&report.errors)?)
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

#[wasm_bindgen(js_name = isValidZip)]
pub fn is_valid_zip_js(zip: &str) -> bool {
    core::is_valid_zip(zip)
}

#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    core::is_valid_phone(phone)
}

#[wasm_bindgen(js_name = capitalizeWords)]
pub fn capitalize_words_js(text: &str) -> String {
    core::capitalize_words(text)
}
