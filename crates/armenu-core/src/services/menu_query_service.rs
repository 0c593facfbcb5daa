// ============================================================================
// ARMenu Core - Menu Query Service
// File: crates/armenu-core/src/services/menu_query_service.rs
// ============================================================================
//! Read path: filtered item list, ordered categories, single item detail

use std::sync::Arc;
use tracing::{debug, warn};

use armenu_shared::constants::{VEGAN_KEYWORD, VEGETARIAN_KEYWORD};

use crate::domain::{MenuCategory, MenuFilter, MenuItem, MenuView};
use crate::error::DomainError;
use crate::matcher;
use crate::repositories::{MenuCategoryRepository, MenuItemRepository};

/// Menu query engine. Side-effect free.
#[derive(Clone)]
pub struct MenuQueryService {
    items: Arc<dyn MenuItemRepository>,
    categories: Arc<dyn MenuCategoryRepository>,
}

impl MenuQueryService {
    pub fn new(
        items: Arc<dyn MenuItemRepository>,
        categories: Arc<dyn MenuCategoryRepository>,
    ) -> Self {
        Self { items, categories }
    }

    /// Active items of `restaurant_id` narrowed by `filter`, plus the
    /// restaurant's categories.
    ///
    /// Category filtering runs before search. The category list does not
    /// depend on which items survive.
    pub async fn query_menu(
        &self,
        restaurant_id: &str,
        filter: &MenuFilter,
    ) -> Result<MenuView, DomainError> {
        let categories = self.categories(restaurant_id).await?;

        let mut items: Vec<MenuItem> = self
            .items
            .list_by_restaurant(restaurant_id)
            .await?
            .into_iter()
            .filter(|item| item.is_active && item.restaurant_id == restaurant_id)
            .collect();
        debug!("{} active items for restaurant {}", items.len(), restaurant_id);

        if let Some(category) = filter.category_filter() {
            items.retain(|item| item.category == category);
            debug!("{} items left after category '{}'", items.len(), category);
        }

        if let Some(term) = filter.search_term() {
            items.retain(|item| {
                let category_name = categories
                    .iter()
                    .find(|c| c.id == item.category)
                    .map(|c| c.name.as_str());
                item_matches(item, category_name, term)
            });
            debug!("{} items left after search '{}'", items.len(), term);
        }

        Ok(MenuView { items, categories })
    }

    /// Categories of a restaurant ordered by `sort_order` (missing = 0).
    /// Equal sort orders keep their insertion order.
    pub async fn categories(&self, restaurant_id: &str) -> Result<Vec<MenuCategory>, DomainError> {
        let mut categories = self.categories.list_by_restaurant(restaurant_id).await?;
        categories.retain(|c| c.restaurant_id == restaurant_id);
        categories.sort_by_key(MenuCategory::effective_sort_order);
        Ok(categories)
    }

    /// Single item by compound key. Soft-deleted items are returned too so
    /// edit views can restore them.
    pub async fn get_item(&self, id: &str, restaurant_id: &str) -> Result<MenuItem, DomainError> {
        self.items.find(id, restaurant_id).await?.ok_or_else(|| {
            warn!("Item {} not found in restaurant {}", id, restaurant_id);
            DomainError::ItemNotFound
        })
    }
}

/// Whether `term` fuzzy-matches any searchable facet of `item`.
fn item_matches(item: &MenuItem, category_name: Option<&str>, term: &str) -> bool {
    matcher::matches(&item.name, term)
        || matcher::matches(&item.description, term)
        || matcher::matches(&item.category, term)
        || category_name.is_some_and(|name| matcher::matches(name, term))
        || item.allergens.iter().any(|allergen| matcher::matches(allergen, term))
        || (item.is_vegetarian && matcher::matches(VEGETARIAN_KEYWORD, term))
        || (item.is_vegan && matcher::matches(VEGAN_KEYWORD, term))
}
