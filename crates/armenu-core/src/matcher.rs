//! Ordered-subsequence matching used by menu search.

/// Case-insensitive subsequence test.
///
/// Every character of `needle` must appear in `haystack` in the same order,
/// not necessarily contiguously. A single cursor walks the haystack left to
/// right, so `"bgr"` matches `"AR Deluxe Burger"`. An empty needle always
/// matches.
pub fn matches(haystack: &str, needle: &str) -> bool {
    let mut cursor = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|wanted| cursor.any(|found| found == wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_needle_matches() {
        assert!(matches("", ""));
        assert!(matches("Caesar Salad", ""));
    }

    #[test]
    fn test_contiguous_substring_matches() {
        assert!(matches("AR Deluxe Burger", "ar"));
        assert!(matches("AR Deluxe Burger", "Deluxe"));
        assert!(matches("AR Deluxe Burger", "LUXE BUR"));
    }

    #[test]
    fn test_scattered_subsequence_matches() {
        assert!(matches("bistro caesar", "bar"));
        assert!(matches("AR Deluxe Burger", "adb"));
        assert!(matches("Interactive Caesar Salad", "cesar"));
    }

    #[test]
    fn test_order_is_preserved() {
        assert!(!matches("rab", "bar"));
        assert!(!matches("burger", "rb"));
    }

    #[test]
    fn test_each_haystack_char_used_once() {
        assert!(!matches("a", "aa"));
        assert!(matches("banana", "aaa"));
        assert!(!matches("banana", "aaaa"));
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert!(!matches("tea", "teas"));
        assert!(!matches("", "x"));
    }

    #[test]
    fn test_superset_of_substring_match() {
        let haystacks = [
            "Premium beef patty with aged cheddar",
            "Crisp romaine lettuce",
            "Café Crème",
            "gluten",
        ];
        for haystack in haystacks {
            let lower: Vec<char> = haystack.to_lowercase().chars().collect();
            for start in 0..lower.len() {
                for end in start..=lower.len() {
                    let needle: String = lower[start..end].iter().collect();
                    assert!(
                        matches(haystack, &needle.to_uppercase()),
                        "'{}' should match inside '{}'",
                        needle,
                        haystack
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(matches("Café Crème", "CAFÉ"));
        assert!(matches("ÜBER Sandwich", "über"));
    }
}
