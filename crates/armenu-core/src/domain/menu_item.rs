// ============================================================================
// ARMenu Core - Menu Item Entity
// File: crates/armenu-core/src/domain/menu_item.rs
// Description: Dish entity, creation payload and partial update
// ============================================================================

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use armenu_shared::constants::PLACEHOLDER_IMAGE;
use armenu_shared::utils::{is_blank, scoped_id};

use crate::domain::timestamp;
use crate::error::DomainError;

/// Menu Item entity
///
/// `id` is unique only within `restaurant_id`; every lookup goes through the
/// `(id, restaurant_id)` pair. `category` is a category id and is not
/// checked against the category list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,

    #[validate(length(min = 1, max = 200, message = "Item name must be between 1 and 200 characters"))]
    pub name: String,

    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub image: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub restaurant_id: String,

    #[serde(rename = "model3D")]
    pub model_3d: Option<String>,

    pub allergens: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,

    #[validate(range(max = 3, message = "Spicy level must be between 0 and 3"))]
    pub spicy_level: u8,

    /// `false` means soft deleted.
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Field validation plus the non-negative price rule.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        ensure_non_negative(self.price)?;
        Ok(())
    }

    /// Soft delete. The record stays in the store.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = timestamp::next_after(self.updated_at);
    }
}

fn ensure_non_negative(price: Decimal) -> Result<Decimal, DomainError> {
    if price < Decimal::ZERO {
        return Err(DomainError::ValidationError(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(price)
}

/// Price as it arrives from a client: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        let parsed = match self {
            // f64 Display is the shortest round-tripping form, so 9.99 stays 9.99.
            PriceInput::Number(value) if value.is_finite() => Decimal::from_str(&value.to_string()).ok(),
            PriceInput::Number(_) => None,
            PriceInput::Text(text) => Decimal::from_str(text.trim()).ok(),
        };

        let price = parsed.ok_or_else(|| {
            DomainError::ValidationError("Price must be a non-negative number".to_string())
        })?;
        ensure_non_negative(price)
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

/// Create item payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub restaurant_id: Option<String>,
    #[serde(rename = "model3D")]
    pub model_3d: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub spicy_level: Option<u8>,
}

impl NewMenuItem {
    /// Restaurant the item is being created for, if supplied.
    pub fn restaurant_id(&self) -> Option<&str> {
        self.restaurant_id.as_deref().filter(|r| !is_blank(r))
    }

    /// Builds an active item stamped with `now`, deriving its id from the
    /// restaurant and the trimmed name.
    pub fn into_item(self, now: DateTime<Utc>) -> Result<MenuItem, DomainError> {
        let name = self.name.filter(|v| !is_blank(v));
        let category = self.category.filter(|v| !is_blank(v));
        let restaurant_id = self.restaurant_id.filter(|v| !is_blank(v));

        let (name, price, category, restaurant_id) = match (name, self.price, category, restaurant_id) {
            (Some(name), Some(price), Some(category), Some(restaurant_id)) => {
                (name, price, category, restaurant_id)
            }
            _ => {
                return Err(DomainError::ValidationError(
                    "Missing required fields: name, price, category, restaurantId".to_string(),
                ))
            }
        };

        let name = name.trim().to_string();
        let item = MenuItem {
            id: scoped_id(&restaurant_id, &name),
            name,
            description: self.description.unwrap_or_default(),
            price: price.to_decimal()?,
            image: self
                .image
                .filter(|v| !is_blank(v))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category,
            restaurant_id,
            model_3d: self.model_3d.filter(|v| !is_blank(v)),
            allergens: self.allergens.unwrap_or_default(),
            is_vegetarian: self.is_vegetarian.unwrap_or(false),
            is_vegan: self.is_vegan.unwrap_or(false),
            spicy_level: self.spicy_level.unwrap_or(0),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        item.check()?;
        Ok(item)
    }
}

/// Partial update: every present field replaces the stored value.
///
/// There is deliberately no `id` or `restaurant_id` here; an item keeps its
/// key and its owning restaurant for life.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "model3D")]
    pub model_3d: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub spicy_level: Option<u8>,
    pub is_active: Option<bool>,
}

impl MenuItemPatch {
    pub fn price(price: impl Into<PriceInput>) -> Self {
        Self { price: Some(price.into()), ..Self::default() }
    }

    /// Returns the merged record with a fresh `updated_at`. `item` itself is
    /// left untouched so a failed validation never leaves a half-merged copy.
    pub fn merge_into(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut merged = item.clone();

        if let Some(price) = &self.price {
            merged.price = price.to_decimal()?;
        }
        if let Some(name) = &self.name {
            merged.name = name.trim().to_string();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(image) = &self.image {
            merged.image = image.clone();
        }
        if let Some(category) = &self.category {
            merged.category = category.trim().to_string();
        }
        if let Some(model_3d) = &self.model_3d {
            merged.model_3d = Some(model_3d.clone());
        }
        if let Some(allergens) = &self.allergens {
            merged.allergens = allergens.clone();
        }
        if let Some(is_vegetarian) = self.is_vegetarian {
            merged.is_vegetarian = is_vegetarian;
        }
        if let Some(is_vegan) = self.is_vegan {
            merged.is_vegan = is_vegan;
        }
        if let Some(spicy_level) = self.spicy_level {
            merged.spicy_level = spicy_level;
        }
        if let Some(is_active) = self.is_active {
            merged.is_active = is_active;
        }

        merged.touch();
        merged.check()?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dish() -> NewMenuItem {
        NewMenuItem {
            name: Some("Test Dish".to_string()),
            price: Some(PriceInput::from("9.99")),
            category: Some("mains".to_string()),
            restaurant_id: Some("bistro-1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_item_derives_id_and_defaults() {
        let now = Utc::now();
        let item = test_dish().into_item(now).unwrap();

        assert_eq!(item.id, "bistro-1-test-dish");
        assert_eq!(item.price, Decimal::new(999, 2));
        assert!(item.is_active);
        assert_eq!(item.image, PLACEHOLDER_IMAGE);
        assert_eq!(item.description, "");
        assert_eq!(item.spicy_level, 0);
        assert_eq!(item.created_at, now);
        assert_eq!(item.updated_at, now);
    }

    #[test]
    fn test_missing_required_fields() {
        for strip in 0..4 {
            let mut payload = test_dish();
            match strip {
                0 => payload.name = None,
                1 => payload.price = None,
                2 => payload.category = Some(" ".to_string()),
                _ => payload.restaurant_id = None,
            }
            let result = payload.into_item(Utc::now());
            assert!(matches!(result, Err(DomainError::ValidationError(_))), "case {}", strip);
        }
    }

    #[test]
    fn test_price_coercion() {
        assert_eq!(PriceInput::from(20.5).to_decimal().unwrap(), Decimal::new(205, 1));
        assert_eq!(PriceInput::from(" 4.25 ").to_decimal().unwrap(), Decimal::new(425, 2));
        assert_eq!(PriceInput::from(0.0).to_decimal().unwrap(), Decimal::ZERO);
        assert!(PriceInput::from("-1").to_decimal().is_err());
        assert!(PriceInput::from(-0.5).to_decimal().is_err());
        assert!(PriceInput::from("cheap").to_decimal().is_err());
        assert!(PriceInput::from(f64::NAN).to_decimal().is_err());
    }

    #[test]
    fn test_price_input_deserializes_number_or_string() {
        let number: PriceInput = serde_json::from_str("18.99").unwrap();
        let text: PriceInput = serde_json::from_str("\"18.99\"").unwrap();
        assert_eq!(number.to_decimal().unwrap(), text.to_decimal().unwrap());
    }

    #[test]
    fn test_spicy_level_out_of_range() {
        let mut payload = test_dish();
        payload.spicy_level = Some(4);
        assert!(matches!(payload.into_item(Utc::now()), Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_patch_merges_present_fields_only() {
        let item = test_dish().into_item(Utc::now()).unwrap();
        let patch = MenuItemPatch {
            description: Some("Now with truffle".to_string()),
            is_vegan: Some(true),
            ..MenuItemPatch::price(12.5)
        };

        let merged = patch.merge_into(&item).unwrap();
        assert_eq!(merged.price, Decimal::new(125, 1));
        assert_eq!(merged.description, "Now with truffle");
        assert!(merged.is_vegan);
        assert_eq!(merged.name, item.name);
        assert_eq!(merged.id, item.id);
        assert_eq!(merged.restaurant_id, item.restaurant_id);
        assert!(merged.updated_at > item.updated_at);
    }

    #[test]
    fn test_patch_rejects_invalid_merge() {
        let item = test_dish().into_item(Utc::now()).unwrap();
        let patch = MenuItemPatch { name: Some("  ".to_string()), ..Default::default() };
        assert!(matches!(patch.merge_into(&item), Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_patch_ignores_restaurant_id_in_payload() {
        let patch: MenuItemPatch =
            serde_json::from_str(r#"{"restaurantId": "other", "price": 3}"#).unwrap();
        let item = test_dish().into_item(Utc::now()).unwrap();
        let merged = patch.merge_into(&item).unwrap();
        assert_eq!(merged.restaurant_id, "bistro-1");
    }

    #[test]
    fn test_deactivate_bumps_updated_at() {
        let mut item = test_dish().into_item(Utc::now()).unwrap();
        let before = item.updated_at;
        item.deactivate();
        assert!(!item.is_active);
        assert!(item.updated_at > before);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = test_dish().into_item(Utc::now()).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["restaurantId"], "bistro-1");
        assert!(json["price"].is_number());
        assert!(json.get("model3D").is_some());
    }
}
