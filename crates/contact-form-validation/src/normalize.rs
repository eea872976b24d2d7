//! Text normalization for name-like fields

/// Capitalizes every space-separated word and lowercases the rest.
///
/// The input is split on single spaces, so runs of spaces (and leading or
/// trailing spaces) produce empty words. Those are kept as-is, which means the
/// output has exactly the same spacing as the input.
///
/// # Examples
/// ```
/// use contact_form_validation::capitalize_words;
/// assert_eq!(capitalize_words("mary ANN"), "Mary Ann");
/// assert_eq!(capitalize_words(" joHN   smith"), " John   Smith");
/// ```
pub fn capitalize_words(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_simple() {
        assert_eq!(capitalize_words("john"), "John");
        assert_eq!(capitalize_words("JOHN DOE"), "John Doe");
        assert_eq!(capitalize_words("new yORK city"), "New York City");
    }

    #[test]
    fn test_capitalize_keeps_spacing() {
        assert_eq!(capitalize_words(" joHN   smith"), " John   Smith");
        assert_eq!(capitalize_words("austin "), "Austin ");
        assert_eq!(capitalize_words("   "), "   ");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_capitalize_only_splits_on_spaces() {
        // Hyphens and tabs are not word boundaries
        assert_eq!(capitalize_words("mary-ann"), "Mary-ann");
        assert_eq!(capitalize_words("a\tb"), "A\tb");
    }

    #[test]
    fn test_capitalize_is_idempotent() {
        for input in ["john", " joHN   smith", "SAN  antonio ", "o'brien"] {
            let once = capitalize_words(input);
            assert_eq!(capitalize_words(&once), once);
        }
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize_words("éLODIE"), "Élodie");
    }
}
