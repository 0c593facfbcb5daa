//! Query input and output of the menu read path

use serde::{Deserialize, Serialize};

use armenu_shared::constants::ALL_CATEGORIES;
use armenu_shared::utils::is_blank;

use super::{MenuCategory, MenuItem};

/// Narrowing applied to a restaurant's active items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuFilter {
    /// Exact category id. `"all"` disables the filter.
    pub category: Option<String>,
    pub search: Option<String>,
}

impl MenuFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self { category: Some(category.into()), ..Self::default() }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self { search: Some(term.into()), ..Self::default() }
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Trimmed search term; blank terms do not filter.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|t| !is_blank(t))
    }
}

/// Items and categories of one restaurant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuView {
    pub items: Vec<MenuItem>,
    pub categories: Vec<MenuCategory>,
}

impl MenuView {
    pub fn total(&self) -> usize {
        self.items.len()
    }
}
