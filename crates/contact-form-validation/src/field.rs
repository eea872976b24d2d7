//! The six contact form fields and their rules

use serde::{Deserialize, Serialize};

use crate::validators::{is_valid_email, is_valid_phone, is_valid_zip};

/// A named input participating in validation.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    City,
    Email,
    ZipCode,
    Phone,
}

/// Format check applied to a non-blank value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Zip,
    Phone,
}

impl FieldFormat {
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            FieldFormat::Email => is_valid_email(value),
            FieldFormat::Zip => is_valid_zip(value),
            FieldFormat::Phone => is_valid_phone(value),
        }
    }

    /// Message shown when a non-blank value fails the check
    pub fn message(self) -> &'static str {
        match self {
            FieldFormat::Email => "Please enter a valid email address (e.g., name@example.com).",
            FieldFormat::Zip => "Please enter a valid 5-digit zip code.",
            FieldFormat::Phone => {
                "Please enter a valid phone number (e.g., 123-456-7890 or 1234567890)."
            }
        }
    }
}

/// What happens when the field loses focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurAction {
    /// Rewrite the value with [`crate::capitalize_words`]
    Capitalize,
    /// Tint the border according to the format check
    Validate(FieldFormat),
}

impl Field {
    /// All fields in check order
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::City,
        Field::Email,
        Field::ZipCode,
        Field::Phone,
    ];

    /// Fields whose value is capitalized on blur and again on a clean submit
    pub const NAME_FIELDS: [Field; 3] = [Field::FirstName, Field::LastName, Field::City];

    /// Default element id in the host document
    pub fn default_id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::City => "city",
            Field::Email => "email",
            Field::ZipCode => "zipCode",
            Field::Phone => "phone",
        }
    }

    /// Message for a blank required field, `None` for optional fields
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            Field::FirstName => Some("First name is required."),
            Field::LastName => Some("Last name is required."),
            Field::City => Some("City is required."),
            Field::Email => Some("Email address is required."),
            Field::ZipCode => Some("Zip code is required."),
            Field::Phone => None,
        }
    }

    pub fn is_required(self) -> bool {
        self.required_message().is_some()
    }

    pub fn format(self) -> Option<FieldFormat> {
        match self {
            Field::Email => Some(FieldFormat::Email),
            Field::ZipCode => Some(FieldFormat::Zip),
            Field::Phone => Some(FieldFormat::Phone),
            Field::FirstName | Field::LastName | Field::City => None,
        }
    }

    pub fn blur_action(self) -> BlurAction {
        match self.format() {
            Some(format) => BlurAction::Validate(format),
            None => BlurAction::Capitalize,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_id())
    }
}
