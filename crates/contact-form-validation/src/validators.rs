// File: src/validators.rs
// Purpose: Format validators for the email, zip code and phone fields

use once_cell::sync::Lazy;
use regex::Regex;

// Browser whitespace: ECMAScript WhiteSpace plus LineTerminator.
// Differs from Unicode White_Space by including U+FEFF and excluding U+0085.
const JS_SPACE_CLASS: &str =
    r"\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// local@domain.tld, no whitespace and a single '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", JS_SPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{5}$").unwrap()
});

// ddd-ddd-dddd or ten bare digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{3}-[0-9]{3}-[0-9]{4}|[0-9]{10})$").unwrap()
});

/// Whitespace as a browser's `trim()` and `\s` see it
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trim browser whitespace from both ends
pub fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Validate email format
///
/// Loose `local@domain.tld` check, not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a US zip code (exactly five ASCII digits)
pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_REGEX.is_match(zip)
}

/// Validate a phone number
///
/// The phone field is optional, so an empty string is valid. Anything else
/// has its whitespace removed and must then be `123-456-7890` or `1234567890`.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }

    let compact: String = phone.chars().filter(|&c| !is_js_whitespace(c)).collect();
    PHONE_REGEX.is_match(&compact)
}
