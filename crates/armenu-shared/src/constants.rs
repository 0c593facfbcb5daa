//! Application-wide constants

/// Category filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Image reference stored when a new item arrives without one.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-food.jpg";

/// Search keywords matched against dietary flags rather than stored text.
pub const VEGETARIAN_KEYWORD: &str = "vegetarian";
pub const VEGAN_KEYWORD: &str = "vegan";
