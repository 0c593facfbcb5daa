// ============================================================================
// ARMenu Infrastructure - In-Memory Record Store
// File: crates/armenu-infrastructure/src/memory/store.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info};

use armenu_core::domain::{MenuCategory, MenuItem, Restaurant};
use armenu_core::error::DomainError;
use armenu_core::repositories::{MenuCategoryRepository, MenuItemRepository, RestaurantRepository};

/// Process-local store for all three collections.
///
/// Each collection sits behind its own lock and keeps insertion order.
/// Writers hold the write lock for the whole record swap, so a reader sees
/// either the old record or the new one.
#[derive(Default)]
pub struct MemoryStore {
    pub(super) restaurants: RwLock<Vec<Restaurant>>,
    pub(super) categories: RwLock<Vec<MenuCategory>>,
    pub(super) items: RwLock<Vec<MenuItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the two demo restaurants.
    pub fn with_demo_data() -> Result<Self, DomainError> {
        let store = Self::new();
        super::seed::load_demo_data(&store)?;
        Ok(store)
    }

    /// Import a restaurant. Restaurants are created out of band, so this is
    /// not part of any repository port.
    ///
    /// Rejects a duplicate id, QR secret or custom domain.
    pub fn add_restaurant(&self, restaurant: Restaurant) -> Result<(), DomainError> {
        let mut restaurants = self.restaurants.write();
        let clash = restaurants.iter().find(|r| {
            r.id == restaurant.id
                || shares(&r.qr_code_secret, &restaurant.qr_code_secret)
                || shares(&r.custom_domain, &restaurant.custom_domain)
        });
        if let Some(existing) = clash {
            return Err(DomainError::ValidationError(format!(
                "Restaurant {} clashes with {} on id, QR secret or domain",
                restaurant.id, existing.id
            )));
        }

        info!("Restaurant imported: {}", restaurant.id);
        restaurants.push(restaurant);
        Ok(())
    }

    /// Flip a restaurant's availability.
    pub fn set_restaurant_active(&self, restaurant_id: &str, is_active: bool) -> bool {
        let mut restaurants = self.restaurants.write();
        match restaurants.iter_mut().find(|r| r.id == restaurant_id) {
            Some(restaurant) => {
                restaurant.is_active = is_active;
                true
            }
            None => false,
        }
    }
}

fn shares(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

fn same_key(item: &MenuItem, id: &str, restaurant_id: &str) -> bool {
    item.id == id && item.restaurant_id == restaurant_id
}

#[async_trait]
impl RestaurantRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>, DomainError> {
        Ok(self.restaurants.read().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_secret(&self, secret: &str) -> Result<Option<Restaurant>, DomainError> {
        Ok(self
            .restaurants
            .read()
            .iter()
            .find(|r| r.qr_code_secret.as_deref() == Some(secret))
            .cloned())
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<Restaurant>, DomainError> {
        Ok(self
            .restaurants
            .read()
            .iter()
            .find(|r| r.custom_domain.as_deref() == Some(domain))
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Restaurant>, DomainError> {
        Ok(self
            .restaurants
            .read()
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MenuCategoryRepository for MemoryStore {
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuCategory>, DomainError> {
        Ok(self
            .categories
            .read()
            .iter()
            .filter(|c| c.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, category: &MenuCategory) -> Result<MenuCategory, DomainError> {
        let mut categories = self.categories.write();
        if categories
            .iter()
            .any(|c| c.id == category.id && c.restaurant_id == category.restaurant_id)
        {
            return Err(DomainError::CategoryAlreadyExists {
                restaurant_id: category.restaurant_id.clone(),
                category_id: category.id.clone(),
            });
        }
        categories.push(category.clone());
        Ok(category.clone())
    }
}

#[async_trait]
impl MenuItemRepository for MemoryStore {
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .items
            .read()
            .iter()
            .filter(|i| i.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn find(&self, id: &str, restaurant_id: &str) -> Result<Option<MenuItem>, DomainError> {
        Ok(self
            .items
            .read()
            .iter()
            .find(|i| same_key(i, id, restaurant_id))
            .cloned())
    }

    async fn insert(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write();
        if items.iter().any(|i| same_key(i, &item.id, &item.restaurant_id)) {
            return Err(DomainError::ItemAlreadyExists {
                restaurant_id: item.restaurant_id.clone(),
                item_id: item.id.clone(),
            });
        }
        items.push(item.clone());
        debug!("Stored item {} ({} total)", item.id, items.len());
        Ok(item.clone())
    }

    async fn replace(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|i| same_key(i, &item.id, &item.restaurant_id))
            .ok_or(DomainError::ItemNotFound)?;
        *slot = item.clone();
        Ok(item.clone())
    }

    async fn mark_inactive(&self, id: &str, restaurant_id: &str) -> Result<bool, DomainError> {
        let mut items = self.items.write();
        match items.iter_mut().find(|i| same_key(i, id, restaurant_id)) {
            Some(item) => {
                item.deactivate();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn restaurant(id: &str, secret: Option<&str>, domain: Option<&str>) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            logo: None,
            address: None,
            phone: None,
            website: None,
            owner_id: "owner-1".to_string(),
            is_active: true,
            subscription_plan: Default::default(),
            qr_code_secret: secret.map(str::to_string),
            custom_domain: domain.map(str::to_string),
            theme: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn item(id: &str, restaurant_id: &str) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: Decimal::ONE,
            image: String::new(),
            category: "mains".to_string(),
            restaurant_id: restaurant_id.to_string(),
            model_3d: None,
            allergens: Vec::new(),
            is_vegetarian: false,
            is_vegan: false,
            spicy_level: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_alternate_keys_unique() {
        let store = MemoryStore::new();
        store.add_restaurant(restaurant("r1", Some("s1"), Some("d1"))).unwrap();
        assert!(store.add_restaurant(restaurant("r2", Some("s1"), None)).is_err());
        assert!(store.add_restaurant(restaurant("r3", None, Some("d1"))).is_err());
        assert!(store.add_restaurant(restaurant("r1", None, None)).is_err());
        assert!(store.add_restaurant(restaurant("r4", None, None)).is_ok());
        assert!(store.add_restaurant(restaurant("r5", None, None)).is_ok());
    }

    #[tokio::test]
    async fn test_lookup_channels() {
        let store = MemoryStore::new();
        store.add_restaurant(restaurant("r1", Some("s1"), Some("d1"))).unwrap();

        assert!(store.find_by_id("r1").await.unwrap().is_some());
        assert!(store.find_by_secret("s1").await.unwrap().is_some());
        assert!(store.find_by_domain("d1").await.unwrap().is_some());
        assert!(store.find_by_secret("S1").await.unwrap().is_none());
        assert!(store.find_by_domain("d").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_item_keys_scoped_by_restaurant() {
        let store = MemoryStore::new();
        MenuItemRepository::insert(&store, &item("a", "r1")).await.unwrap();
        MenuItemRepository::insert(&store, &item("a", "r2")).await.unwrap();

        let duplicate = MenuItemRepository::insert(&store, &item("a", "r1")).await;
        assert!(matches!(duplicate, Err(DomainError::ItemAlreadyExists { .. })));

        assert!(store.mark_inactive("a", "r1").await.unwrap());
        assert!(!store.find("a", "r1").await.unwrap().unwrap().is_active);
        assert!(store.find("a", "r2").await.unwrap().unwrap().is_active);
        assert!(!store.mark_inactive("a", "r3").await.unwrap());
    }

    #[tokio::test]
    async fn test_replace_missing_item() {
        let store = MemoryStore::new();
        let result = store.replace(&item("a", "r1")).await;
        assert!(matches!(result, Err(DomainError::ItemNotFound)));
    }

    #[tokio::test]
    async fn test_categories_keep_insertion_order() {
        let store = MemoryStore::new();
        for (id, order) in [("c", 1), ("a", 1), ("b", 0)] {
            let category = MenuCategory {
                id: id.to_string(),
                name: id.to_string(),
                description: None,
                icon: None,
                restaurant_id: "r1".to_string(),
                sort_order: Some(order),
            };
            MenuCategoryRepository::insert(&store, &category).await.unwrap();
        }
        let listed = MenuCategoryRepository::list_by_restaurant(&store, "r1").await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
