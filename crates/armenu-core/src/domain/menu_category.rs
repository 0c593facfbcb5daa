// ============================================================================
// ARMenu Core - Menu Category Entity
// File: crates/armenu-core/src/domain/menu_category.rs
// Description: Restaurant-scoped menu sections with custom ordering
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use armenu_shared::utils::{is_blank, scoped_id};

use crate::error::DomainError;

/// Menu Category entity. `id` is only unique together with `restaurant_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,

    #[validate(length(min = 1, max = 100, message = "Category name must be between 1 and 100 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(max = 16, message = "Category icon too long"))]
    pub icon: Option<String>,

    pub restaurant_id: String,

    /// Missing sort order sorts as 0.
    pub sort_order: Option<i32>,
}

impl MenuCategory {
    pub fn effective_sort_order(&self) -> i32 {
        self.sort_order.unwrap_or(0)
    }
}

/// Create category payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub restaurant_id: Option<String>,
    pub sort_order: Option<i32>,
}

impl NewMenuCategory {
    /// Builds the entity, deriving its id from the restaurant and name.
    pub fn into_category(self) -> Result<MenuCategory, DomainError> {
        let name = self.name.filter(|n| !is_blank(n));
        let restaurant_id = self.restaurant_id.filter(|r| !is_blank(r));
        let (name, restaurant_id) = match (name, restaurant_id) {
            (Some(name), Some(restaurant_id)) => (name.trim().to_string(), restaurant_id),
            _ => {
                return Err(DomainError::ValidationError(
                    "Missing required fields: name, restaurantId".to_string(),
                ))
            }
        };

        let category = MenuCategory {
            id: scoped_id(&restaurant_id, &name),
            name,
            description: self.description.map(|d| d.trim().to_string()),
            icon: self.icon,
            restaurant_id,
            sort_order: self.sort_order,
        };

        category.validate()?;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category() {
        let category = NewMenuCategory {
            name: Some("Main Course".to_string()),
            restaurant_id: Some("restaurant-1".to_string()),
            sort_order: Some(2),
            ..Default::default()
        }
        .into_category()
        .unwrap();

        assert_eq!(category.id, "restaurant-1-main-course");
        assert_eq!(category.effective_sort_order(), 2);
    }

    #[test]
    fn test_missing_name_rejected() {
        let result = NewMenuCategory {
            name: Some("   ".to_string()),
            restaurant_id: Some("restaurant-1".to_string()),
            ..Default::default()
        }
        .into_category();

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_missing_sort_order_is_zero() {
        let category = NewMenuCategory {
            name: Some("Drinks".to_string()),
            restaurant_id: Some("restaurant-1".to_string()),
            ..Default::default()
        }
        .into_category()
        .unwrap();

        assert_eq!(category.effective_sort_order(), 0);
    }
}
