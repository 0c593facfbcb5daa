//! Request and response bodies of the menu API

use serde::{Deserialize, Serialize};

use armenu_core::domain::{
    MenuCategory, MenuFilter, MenuItem, MenuItemPatch, Restaurant, RestaurantLookup,
};

/// Query string of `GET /api/menu`.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(rename = "restaurantId")]
    pub restaurant_id: Option<String>,
    /// QR secret
    pub r: Option<String>,
    pub domain: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "includeInfo")]
    pub include_info: Option<String>,
}

impl MenuQuery {
    pub fn lookup(&self) -> RestaurantLookup {
        RestaurantLookup {
            id: self.restaurant_id.clone(),
            secret: self.r.clone(),
            domain: self.domain.clone(),
        }
    }

    pub fn filter(&self) -> MenuFilter {
        MenuFilter {
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }

    /// Only the literal `true` turns restaurant info on.
    pub fn include_info(&self) -> bool {
        self.include_info.as_deref() == Some("true")
    }

    pub fn item_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
    pub categories: Vec<MenuCategory>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item: MenuItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}

/// Result of a create or update.
#[derive(Debug, Serialize)]
pub struct ItemMutationResponse {
    pub message: String,
    pub item: MenuItem,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub success: bool,
}

/// Body of `PUT /api/menu`: the item key plus any subset of fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub id: Option<String>,
    pub restaurant_id: Option<String>,
    #[serde(flatten)]
    pub patch: MenuItemPatch,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemKeyQuery {
    pub id: Option<String>,
    pub restaurant_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub owner_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use armenu_core::domain::PriceInput;

    #[test]
    fn test_update_request_flattens_patch() {
        let request: UpdateItemRequest = serde_json::from_str(
            r#"{"id": "a", "restaurantId": "bistro-1", "price": "20.50", "isVegan": true}"#,
        )
        .unwrap();

        assert_eq!(request.id.as_deref(), Some("a"));
        assert_eq!(request.restaurant_id.as_deref(), Some("bistro-1"));
        assert_eq!(request.patch.price, Some(PriceInput::Text("20.50".to_string())));
        assert_eq!(request.patch.is_vegan, Some(true));
        assert!(request.patch.name.is_none());
    }

    #[test]
    fn test_include_info_requires_literal_true() {
        let mut query = MenuQuery::default();
        assert!(!query.include_info());
        query.include_info = Some("1".to_string());
        assert!(!query.include_info());
        query.include_info = Some("true".to_string());
        assert!(query.include_info());
    }

    #[test]
    fn test_lookup_maps_all_channels() {
        let query = MenuQuery {
            r: Some("qr".to_string()),
            domain: Some("bistro".to_string()),
            ..MenuQuery::default()
        };
        let lookup = query.lookup();
        assert_eq!(lookup.id, None);
        assert_eq!(lookup.secret.as_deref(), Some("qr"));
        assert_eq!(lookup.domain.as_deref(), Some("bistro"));
    }
}
