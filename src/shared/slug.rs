//! Slug derivation helpers.
//!
//! Pure string functions: no I/O and no knowledge of where slugs are stored.

use std::collections::HashSet;

use crate::shared::validation::SLUG_REGEX;

/// Turn free text into a slug candidate: trim, lowercase, and collapse every
/// run of whitespace into a single hyphen.
///
/// Punctuation is kept as-is, so the result only matches the slug pattern
/// when the input was made of alphanumerics and whitespace. Use [`is_valid`]
/// when strict validity matters.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn is_valid(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Normalize `base` and, if the result is already taken, append `-2`, `-3`, ...
/// until a free candidate is found.
pub fn generate_unique(base: &str, existing: &HashSet<String>) -> String {
    let normalized = normalize(base);
    if !existing.contains(&normalized) {
        return normalized;
    }

    let mut counter: u64 = 2;
    loop {
        let candidate = format!("{}-{}", normalized, counter);
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Books"), "books");
        assert_eq!(normalize("  Home   Garden  "), "home-garden");
        assert_eq!(normalize("Tabs\tand\nNewlines"), "tabs-and-newlines");
        assert_eq!(normalize("already-a-slug"), "already-a-slug");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        let slug = normalize("C++ Books!");
        assert_eq!(slug, "c++-books!");
        assert!(!is_valid(&slug));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("books"));
        assert!(is_valid("sci-fi-2"));
        assert!(!is_valid(""));
        assert!(!is_valid("-books"));
        assert!(!is_valid("books-"));
        assert!(!is_valid("sci--fi"));
        assert!(!is_valid("Books"));
    }

    #[test]
    fn test_generate_unique_returns_base_when_free() {
        assert_eq!(generate_unique("Books", &set(&["novels"])), "books");
        assert_eq!(generate_unique("Books", &HashSet::new()), "books");
    }

    #[test]
    fn test_generate_unique_appends_first_free_counter() {
        assert_eq!(generate_unique("Books", &set(&["books"])), "books-2");
        assert_eq!(
            generate_unique("Books", &set(&["books", "books-2", "books-3"])),
            "books-4"
        );
    }

    #[test]
    fn test_generate_unique_fills_gaps() {
        assert_eq!(
            generate_unique("books", &set(&["books", "books-3"])),
            "books-2"
        );
    }
}
