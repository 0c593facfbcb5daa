//! Record builders shared by service tests

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::{MenuCategory, MenuItem, Restaurant, SubscriptionPlan};

pub fn restaurant(id: &str, is_active: bool) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("Restaurant {}", id),
        description: String::new(),
        logo: None,
        address: None,
        phone: None,
        website: None,
        owner_id: "owner-1".to_string(),
        is_active,
        subscription_plan: SubscriptionPlan::Basic,
        qr_code_secret: Some(format!("{}-secret", id)),
        custom_domain: Some(id.to_string()),
        theme: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

pub fn item(id: &str, restaurant_id: &str, name: &str, category: &str) -> MenuItem {
    let now = Utc::now();
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price: Decimal::new(1000, 2),
        image: "/images/placeholder-food.jpg".to_string(),
        category: category.to_string(),
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

pub fn category(id: &str, restaurant_id: &str, name: &str, sort_order: Option<i32>) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        icon: None,
        restaurant_id: restaurant_id.to_string(),
        sort_order,
    }
}
