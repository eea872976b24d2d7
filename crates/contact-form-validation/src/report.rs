// File: src/report.rs
// Purpose: Submit-time validation pass, independent of any document

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::validators::js_trim;

/// Snapshot of the six field values.
///
/// `None` means the field is not present in the form, which is different from
/// a present field left blank: absent fields are never checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormValues {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactFormValues {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Builder-style [`ContactFormValues::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::City => &self.city,
            Field::Email => &self.email,
            Field::ZipCode => &self.zip_code,
            Field::Phone => &self.phone,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::City => &mut self.city,
            Field::Email => &mut self.email,
            Field::ZipCode => &mut self.zip_code,
            Field::Phone => &mut self.phone,
        }
    }
}

/// One failed field check
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Ordered errors from one submit attempt; empty means the form is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Messages in check order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Fields that failed, in check order
    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn push(&mut self, field: Field, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

/// Check every present field in order and collect at most one error per field.
///
/// Blankness is judged on the trimmed value, while the format check sees the
/// value as typed, so `" name@example.com"` is reported as malformed rather
/// than passing.
pub fn validate_submission(values: &ContactFormValues) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in Field::ALL {
        let Some(value) = values.get(field) else {
            continue;
        };

        if js_trim(value).is_empty() {
            if let Some(message) = field.required_message() {
                report.push(field, message);
            }
            continue;
        }

        if let Some(format) = field.format() {
            if !format.is_valid(value) {
                report.push(field, format.message());
            }
        }
    }

    report
}
