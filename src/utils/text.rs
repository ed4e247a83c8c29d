// src/utils/text.rs

//! Accent- and case-insensitive text normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text for keyword matching: NFKD-decompose, drop combining
/// marks, lowercase. `"Ordenación"` and `"ordenacion"` normalize to the
/// same string.
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Whether the normalized form of `haystack` contains any of the needles.
/// Needles must already be normalized.
pub fn contains_any(haystack: &str, normalized_needles: &[String]) -> bool {
    let normalized = normalize(haystack);
    normalized_needles.iter().any(|kw| normalized.contains(kw))
}

/// Truncate to at most `max_chars` characters, respecting code point
/// boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("Ordenación"), "ordenacion");
        assert_eq!(normalize("ordenacion"), "ordenacion");
        assert_eq!(normalize("URBANIZACIÓN"), "urbanizacion");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("Evaluación Ambiental");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_non_latin_passthrough() {
        // No decomposition applies; lowercasing is still performed.
        assert_eq!(normalize("Π例"), normalize("π例"));
    }

    #[test]
    fn test_contains_any() {
        let needles = vec!["urbanismo".to_string(), "planeamiento".to_string()];
        assert!(contains_any("Plan de Urbanismo municipal", &needles));
        assert!(!contains_any("Convocatoria de becas", &needles));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Ordenación", 7), "Ordenac");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
