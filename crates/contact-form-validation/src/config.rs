// File: src/config.rs
// Purpose: Form configuration (element ids, timing, colors, copy)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::error::ConfigError;
use crate::field::Field;

/// Attribute on the form element that may carry a JSON [`FormConfig`]
pub const CONFIG_ATTRIBUTE: &str = "data-contact-form";

/// Contact form configuration
///
/// Every key is optional; missing keys fall back to the defaults below, so
/// `{}` is a complete config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Id of the form element (default: "contactForm")
    #[serde(default = "default_form_id")]
    pub form_id: String,

    #[serde(default)]
    pub field_ids: FieldIds,

    /// Id given to the created error region (default: "formErrors")
    #[serde(default = "default_error_region_id")]
    pub error_region_id: String,

    /// Id given to the created success region (default: "formSuccess")
    #[serde(default = "default_success_region_id")]
    pub success_region_id: String,

    /// Delay between a clean submit and the form reset (default: 3000)
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    /// Whether editing any control cancels a pending reset (default: true)
    #[serde(default = "default_true")]
    pub cancel_reset_on_edit: bool,

    #[serde(default)]
    pub palette: TintPalette,

    #[serde(default = "default_error_heading")]
    pub error_heading: String,

    #[serde(default = "default_success_message")]
    pub success_message: String,
}

/// Element ids of the six fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIds {
    #[serde(default = "default_first_name_id")]
    pub first_name: String,
    #[serde(default = "default_last_name_id")]
    pub last_name: String,
    #[serde(default = "default_city_id")]
    pub city: String,
    #[serde(default = "default_email_id")]
    pub email: String,
    #[serde(default = "default_zip_code_id")]
    pub zip_code: String,
    #[serde(default = "default_phone_id")]
    pub phone: String,
}

/// CSS colors for the three border tints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TintPalette {
    #[serde(default = "default_invalid_color")]
    pub invalid: String,
    #[serde(default = "default_valid_color")]
    pub valid: String,
    #[serde(default = "default_neutral_color")]
    pub neutral: String,
}

impl FormConfig {
    /// Parse a JSON config, e.g. the value of [`CONFIG_ATTRIBUTE`]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids are non-empty and distinct and colors are set
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids: Vec<(&'static str, &str)> = vec![
            ("form", self.form_id.as_str()),
            ("error region", self.error_region_id.as_str()),
            ("success region", self.success_region_id.as_str()),
        ];
        for field in Field::ALL {
            ids.push((field.default_id(), self.field_id(field)));
        }

        let mut seen = HashSet::new();
        for (what, id) in ids {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyId(what));
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateId(id.to_string()));
            }
        }

        for (what, color) in [
            ("invalid", &self.palette.invalid),
            ("valid", &self.palette.valid),
            ("neutral", &self.palette.neutral),
        ] {
            if color.trim().is_empty() {
                return Err(ConfigError::EmptyColor(what));
            }
        }

        Ok(())
    }

    pub fn field_id(&self, field: Field) -> &str {
        let ids = &self.field_ids;
        match field {
            Field::FirstName => &ids.first_name,
            Field::LastName => &ids.last_name,
            Field::City => &ids.city,
            Field::Email => &ids.email,
            Field::ZipCode => &ids.zip_code,
            Field::Phone => &ids.phone,
        }
    }

    /// Reverse lookup from element id to field
    pub fn field_for_id(&self, id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|&f| self.field_id(f) == id)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            field_ids: FieldIds::default(),
            error_region_id: default_error_region_id(),
            success_region_id: default_success_region_id(),
            reset_delay_ms: default_reset_delay_ms(),
            cancel_reset_on_edit: default_true(),
            palette: TintPalette::default(),
            error_heading: default_error_heading(),
            success_message: default_success_message(),
        }
    }
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            first_name: default_first_name_id(),
            last_name: default_last_name_id(),
            city: default_city_id(),
            email: default_email_id(),
            zip_code: default_zip_code_id(),
            phone: default_phone_id(),
        }
    }
}

impl Default for TintPalette {
    fn default() -> Self {
        Self {
            invalid: default_invalid_color(),
            valid: default_valid_color(),
            neutral: default_neutral_color(),
        }
    }
}

// Default values
fn default_form_id() -> String {
    "contactForm".to_string()
}

fn default_error_region_id() -> String {
    "formErrors".to_string()
}

fn default_success_region_id() -> String {
    "formSuccess".to_string()
}

fn default_reset_delay_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_error_heading() -> String {
    "Please fix the following errors:".to_string()
}

fn default_success_message() -> String {
    "Thank you! Your message has been sent successfully.".to_string()
}

fn default_first_name_id() -> String {
    Field::FirstName.default_id().to_string()
}

fn default_last_name_id() -> String {
    Field::LastName.default_id().to_string()
}

fn default_city_id() -> String {
    Field::City.default_id().to_string()
}

fn default_email_id() -> String {
    Field::Email.default_id().to_string()
}

fn default_zip_code_id() -> String {
    Field::ZipCode.default_id().to_string()
}

fn default_phone_id() -> String {
    Field::Phone.default_id().to_string()
}

fn default_invalid_color() -> String {
    "#dc3545".to_string()
}

fn default_valid_color() -> String {
    "#28a745".to_string()
}

fn default_neutral_color() -> String {
    "#a1887f".to_string()
}
