//! Contact Form Validation
//!
//! Pure Rust validation, normalization and feedback logic for the contact form.
//! Used natively in tests and by `contact-form-wasm` in the browser.
//!
//! The crate is split the same way the form is driven:
//! - [`validators`] and [`normalize`] are plain functions over text.
//! - [`validate_submission`] turns a [`ContactFormValues`] snapshot into an
//!   ordered [`ValidationReport`] without touching any document.
//! - [`FormController`] owns the per-form state machine and drives a
//!   [`FormSurface`] (the DOM in the browser, an in-memory fake in tests).

pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod field;
pub mod normalize;
pub mod report;
pub mod validators;

pub use config::{FormConfig, TintPalette};
pub use controller::{FormController, FormSurface, ResetTicket, SubmitOutcome, SubmitPhase};
pub use error::ConfigError;
pub use feedback::{BorderTint, Feedback};
pub use field::{Field, FieldFormat};
pub use normalize::capitalize_words;
pub use report::{validate_submission, ContactFormValues, FieldError, ValidationReport};
pub use validators::{is_js_whitespace, is_valid_email, is_valid_phone, is_valid_zip, js_trim};
