//! Shared helpers for the import/export backends.

use unicode_normalization::UnicodeNormalization;

/// Maximum length of a sanitized file stem.
const MAX_STEM_LEN: usize = 50;

/// Make a participant name safe for use as a file stem.
///
/// NFD-normalizes the name, drops combining accent marks, replaces
/// every remaining non-ASCII-alphanumeric character with `_`, and caps
/// the result at 50 characters. Hungarian accented names fold to their
/// base letters rather than disappearing into underscores.
///
/// # Examples
///
/// ```
/// use confplan_backend::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Kovács Anna"), "Kovacs_Anna");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_STEM_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_folded_to_base_letters() {
        assert_eq!(sanitize_filename("Kovács Éva"), "Kovacs_Eva");
    }

    #[test]
    fn test_double_acute_accents_folded() {
        // Hungarian ő/ű decompose to o/u plus a combining double acute
        assert_eq!(sanitize_filename("Győző"), "Gyozo");
        assert_eq!(sanitize_filename("Műszaki"), "Muszaki");
    }

    #[test]
    fn test_punctuation_replaced_with_underscores() {
        assert_eq!(sanitize_filename("Dr. Nagy-Kiss"), "Dr__Nagy_Kiss");
    }

    #[test]
    fn test_truncated_to_fifty_characters() {
        let long = "a".repeat(80);
        assert_eq!(sanitize_filename(&long).len(), 50);
    }

    #[test]
    fn test_non_latin_becomes_underscores() {
        assert_eq!(sanitize_filename("李明"), "__");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_digits_preserved() {
        assert_eq!(sanitize_filename("Session 42"), "Session_42");
    }
}
