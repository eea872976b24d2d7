// File: src/feedback.rs
// Purpose: Feedback region state, border tints and their markup

use maud::{html, Markup};

use crate::config::{FormConfig, TintPalette};

/// Base style of both feedback regions; they start hidden
pub const REGION_BASE_STYLE: &str =
    "margin-bottom: 1.5rem; padding: 1rem; border-radius: 5px; display: none;";

/// Inline styles applied to a region when it becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub color: &'static str,
}

pub const ERROR_REGION_STYLE: RegionStyle = RegionStyle {
    background: "#f8d7da",
    border: "1px solid #f5c6cb",
    color: "#721c24",
};

pub const SUCCESS_REGION_STYLE: RegionStyle = RegionStyle {
    background: "#d4edda",
    border: "1px solid #c3e6cb",
    color: "#155724",
};

const ERROR_TEXT_COLOR: &str = "#dc3545";

/// Validity tint of a field border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderTint {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl BorderTint {
    /// Tint after a format check on blur: empty values stay neutral
    pub fn for_value(value: &str, is_valid: bool) -> Self {
        if value.is_empty() {
            BorderTint::Neutral
        } else if is_valid {
            BorderTint::Valid
        } else {
            BorderTint::Invalid
        }
    }

    pub fn color(self, palette: &TintPalette) -> &str {
        match self {
            BorderTint::Neutral => &palette.neutral,
            BorderTint::Valid => &palette.valid,
            BorderTint::Invalid => &palette.invalid,
        }
    }
}

/// What the two feedback regions show.
///
/// A single value covers both regions, so errors and success can never be
/// visible together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Hidden,
    Errors(Vec<String>),
    Success(String),
}

impl Feedback {
    pub fn errors_visible(&self) -> bool {
        matches!(self, Feedback::Errors(_))
    }

    pub fn success_visible(&self) -> bool {
        matches!(self, Feedback::Success(_))
    }

    /// Inner markup of the error region, `None` unless showing errors
    pub fn error_markup(&self, config: &FormConfig) -> Option<Markup> {
        match self {
            Feedback::Errors(messages) => Some(render_errors(&config.error_heading, messages)),
            _ => None,
        }
    }

    /// Inner markup of the success region, `None` unless showing success
    pub fn success_markup(&self) -> Option<Markup> {
        match self {
            Feedback::Success(message) => Some(render_success(message)),
            _ => None,
        }
    }
}

/// Heading plus a bulleted list, one item per message in order
pub fn render_errors(heading: &str, messages: &[String]) -> Markup {
    html! {
        strong style={ "color: " (ERROR_TEXT_COLOR) ";" } { (heading) }
        ul style={ "margin-top: 0.5rem; margin-bottom: 0; padding-left: 1.5rem; color: " (ERROR_TEXT_COLOR) ";" } {
            @for message in messages {
                li { (message) }
            }
        }
    }
}

pub fn render_success(message: &str) -> Markup {
    html! {
        strong style={ "color: " (SUCCESS_REGION_STYLE.color) ";" } { (message) }
    }
}
