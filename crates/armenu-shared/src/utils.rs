//! Utility functions

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Lowercases `name` and collapses every whitespace run into a single `-`.
///
/// Leading and trailing whitespace is trimmed first so `" Test Dish "`
/// and `"Test Dish"` share a slug.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.trim().to_lowercase(), "-")
        .into_owned()
}

/// Id of a record owned by a restaurant: `{restaurant_id}-{slug(name)}`.
pub fn scoped_id(restaurant_id: &str, name: &str) -> String {
    format!("{}-{}", restaurant_id, slugify(name))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Test Dish"), "test-dish");
        assert_eq!(slugify("AR  Deluxe\tBurger"), "ar-deluxe-burger");
        assert_eq!(slugify("  Tiramisu "), "tiramisu");
    }

    #[test]
    fn test_slugify_keeps_punctuation() {
        assert_eq!(slugify("Chef's Special!"), "chef's-special!");
    }

    #[test]
    fn test_scoped_id() {
        assert_eq!(scoped_id("bistro-1", "Test Dish"), "bistro-1-test-dish");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" a "));
    }
}
