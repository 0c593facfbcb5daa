// ============================================================================
// ARMenu Core - Menu Mutation Service
// File: crates/armenu-core/src/services/menu_mutation_service.rs
// ============================================================================
//! Owner-facing writes: create, partial update and soft delete of menu items

use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

use armenu_shared::utils::is_blank;

use crate::domain::{MenuCategory, MenuItem, MenuItemPatch, NewMenuCategory, NewMenuItem};
use crate::error::DomainError;
use crate::repositories::{MenuCategoryRepository, MenuItemRepository};
use crate::services::RestaurantResolver;

/// Menu mutation service. Every operation is scoped to one restaurant.
#[derive(Clone)]
pub struct MenuMutationService {
    items: Arc<dyn MenuItemRepository>,
    categories: Arc<dyn MenuCategoryRepository>,
    resolver: RestaurantResolver,
}

impl MenuMutationService {
    pub fn new(
        items: Arc<dyn MenuItemRepository>,
        categories: Arc<dyn MenuCategoryRepository>,
        resolver: RestaurantResolver,
    ) -> Self {
        Self { items, categories, resolver }
    }

    /// Create a new active item.
    ///
    /// The id is `{restaurant_id}-{slug(name)}`. A second create with the
    /// same restaurant and name is rejected with `ItemAlreadyExists`, even
    /// when the earlier item is soft-deleted.
    pub async fn create(&self, payload: NewMenuItem) -> Result<MenuItem, DomainError> {
        let item = payload.into_item(Utc::now()).map_err(|e| {
            warn!("Rejected new menu item: {}", e);
            e
        })?;

        // 1. Owning restaurant must exist, active or not
        if self.resolver.find(&item.restaurant_id).await?.is_none() {
            warn!("Create item failed: restaurant {} not found", item.restaurant_id);
            return Err(DomainError::RestaurantNotFound);
        }

        // 2. Derived id must be free within the restaurant
        if self.items.find(&item.id, &item.restaurant_id).await?.is_some() {
            warn!("Create item failed: {} already exists", item.id);
            return Err(DomainError::ItemAlreadyExists {
                restaurant_id: item.restaurant_id.clone(),
                item_id: item.id.clone(),
            });
        }

        // 3. Save to store
        let created = self.items.insert(&item).await?;

        info!("Menu item created: {} in {}", created.id, created.restaurant_id);
        Ok(created)
    }

    /// Apply a partial update to the item at `(id, restaurant_id)`.
    pub async fn update(
        &self,
        id: &str,
        restaurant_id: &str,
        patch: &MenuItemPatch,
    ) -> Result<MenuItem, DomainError> {
        require_key(id, restaurant_id)?;

        let current = self.items.find(id, restaurant_id).await?.ok_or_else(|| {
            warn!("Update failed: item {} not found in {}", id, restaurant_id);
            DomainError::ItemNotFound
        })?;

        let merged = patch.merge_into(&current)?;
        let updated = self.items.replace(&merged).await?;

        info!("Menu item updated: {} in {}", updated.id, updated.restaurant_id);
        Ok(updated)
    }

    /// Soft delete the item at `(id, restaurant_id)`.
    pub async fn delete(&self, id: &str, restaurant_id: &str) -> Result<bool, DomainError> {
        require_key(id, restaurant_id)?;

        if !self.items.mark_inactive(id, restaurant_id).await? {
            warn!("Delete failed: item {} not found in {}", id, restaurant_id);
            return Err(DomainError::ItemNotFound);
        }

        info!("Menu item deactivated: {} in {}", id, restaurant_id);
        Ok(true)
    }

    /// Append a category to an existing restaurant.
    pub async fn create_category(&self, payload: NewMenuCategory) -> Result<MenuCategory, DomainError> {
        let category = payload.into_category()?;

        if self.resolver.find(&category.restaurant_id).await?.is_none() {
            warn!("Create category failed: restaurant {} not found", category.restaurant_id);
            return Err(DomainError::RestaurantNotFound);
        }

        let created = self.categories.insert(&category).await?;

        info!("Menu category created: {} in {}", created.id, created.restaurant_id);
        Ok(created)
    }
}

fn require_key(id: &str, restaurant_id: &str) -> Result<(), DomainError> {
    if is_blank(id) || is_blank(restaurant_id) {
        return Err(DomainError::ValidationError(
            "Missing required fields: id, restaurantId".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::domain::PriceInput;
    use crate::repositories::{MockMenuCategoryRepository, MockMenuItemRepository, MockRestaurantRepository};
    use crate::services::fixtures::{item, restaurant};

    fn known_restaurants() -> RestaurantResolver {
        let mut mock = MockRestaurantRepository::new();
        mock.expect_find_by_id().returning(|id| match id {
            "bistro-1" => Ok(Some(restaurant("bistro-1", true))),
            "closed-1" => Ok(Some(restaurant("closed-1", false))),
            _ => Ok(None),
        });
        RestaurantResolver::new(Arc::new(mock))
    }

    fn service(items: MockMenuItemRepository) -> MenuMutationService {
        MenuMutationService::new(
            Arc::new(items),
            Arc::new(MockMenuCategoryRepository::new()),
            known_restaurants(),
        )
    }

    fn test_dish(restaurant_id: &str) -> NewMenuItem {
        NewMenuItem {
            name: Some("Test Dish".to_string()),
            price: Some(PriceInput::from("9.99")),
            category: Some("mains".to_string()),
            restaurant_id: Some(restaurant_id.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_item() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find().returning(|_, _| Ok(None));
        items
            .expect_insert()
            .times(1)
            .returning(|item| Ok(item.clone()));

        let created = service(items).create(test_dish("bistro-1")).await.unwrap();
        assert_eq!(created.id, "bistro-1-test-dish");
        assert_eq!(created.price, Decimal::new(999, 2));
        assert!(created.is_active);
    }

    #[tokio::test]
    async fn test_create_for_inactive_restaurant_allowed() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find().returning(|_, _| Ok(None));
        items.expect_insert().returning(|item| Ok(item.clone()));

        let created = service(items).create(test_dish("closed-1")).await.unwrap();
        assert_eq!(created.restaurant_id, "closed-1");
    }

    #[tokio::test]
    async fn test_create_unknown_restaurant() {
        let mut items = MockMenuItemRepository::new();
        items.expect_insert().never();

        let result = service(items).create(test_dish("ghost")).await;
        assert!(matches!(result, Err(DomainError::RestaurantNotFound)));
    }

    #[tokio::test]
    async fn test_create_validation_before_lookup() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find().never();
        items.expect_insert().never();

        let mut payload = test_dish("ghost");
        payload.price = None;
        let result = service(items).create(payload).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_rejected() {
        let mut items = MockMenuItemRepository::new();
        items
            .expect_find()
            .returning(|id, restaurant_id| Ok(Some(item(id, restaurant_id, "Test Dish", "mains"))));
        items.expect_insert().never();

        let result = service(items).create(test_dish("bistro-1")).await;
        match result {
            Err(DomainError::ItemAlreadyExists { restaurant_id, item_id }) => {
                assert_eq!(restaurant_id, "bistro-1");
                assert_eq!(item_id, "bistro-1-test-dish");
            }
            other => panic!("expected ItemAlreadyExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_merges_and_bumps() {
        let original = item("a", "bistro-1", "AR Deluxe Burger", "mains");
        let before = original.updated_at;
        let mut items = MockMenuItemRepository::new();
        items
            .expect_find()
            .withf(|id, restaurant_id| id == "a" && restaurant_id == "bistro-1")
            .returning(move |_, _| Ok(Some(original.clone())));
        items.expect_replace().times(1).returning(|item| Ok(item.clone()));

        let updated = service(items)
            .update("a", "bistro-1", &MenuItemPatch::price(20.5))
            .await
            .unwrap();
        assert_eq!(updated.price, Decimal::new(205, 1));
        assert_eq!(updated.name, "AR Deluxe Burger");
        assert!(updated.updated_at > before);
    }

    #[tokio::test]
    async fn test_update_wrong_restaurant() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find().returning(|_, _| Ok(None));
        items.expect_replace().never();

        let result = service(items)
            .update("a", "wrong-restaurant", &MenuItemPatch::price(1.0))
            .await;
        assert!(matches!(result, Err(DomainError::ItemNotFound)));
    }

    #[tokio::test]
    async fn test_update_requires_keys() {
        let result = service(MockMenuItemRepository::new())
            .update("", "bistro-1", &MenuItemPatch::default())
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_invalid_patch_not_written() {
        let mut items = MockMenuItemRepository::new();
        items
            .expect_find()
            .returning(|_, _| Ok(Some(item("a", "bistro-1", "AR Deluxe Burger", "mains"))));
        items.expect_replace().never();

        let result = service(items)
            .update("a", "bistro-1", &MenuItemPatch::price("-3"))
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_wrong_restaurant() {
        let mut items = MockMenuItemRepository::new();
        items
            .expect_mark_inactive()
            .withf(|id, restaurant_id| id == "a" && restaurant_id == "wrong-restaurant")
            .returning(|_, _| Ok(false));

        let result = service(items).delete("a", "wrong-restaurant").await;
        assert!(matches!(result, Err(DomainError::ItemNotFound)));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut items = MockMenuItemRepository::new();
        items.expect_mark_inactive().times(1).returning(|_, _| Ok(true));

        assert!(service(items).delete("a", "bistro-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_category() {
        let mut categories = MockMenuCategoryRepository::new();
        categories.expect_insert().times(1).returning(|c| Ok(c.clone()));
        let service = MenuMutationService::new(
            Arc::new(MockMenuItemRepository::new()),
            Arc::new(categories),
            known_restaurants(),
        );

        let created = service
            .create_category(NewMenuCategory {
                name: Some("Small Plates".to_string()),
                restaurant_id: Some("bistro-1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, "bistro-1-small-plates");
    }
}
