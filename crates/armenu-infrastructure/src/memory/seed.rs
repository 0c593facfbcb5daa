//! Demo tenants: an AR bistro and a café, with their categories and dishes.

use chrono::Utc;
use rust_decimal::Decimal;

use armenu_core::domain::{MenuCategory, MenuItem, Restaurant, RestaurantTheme, SubscriptionPlan};
use armenu_core::error::DomainError;

use super::MemoryStore;

pub fn load_demo_data(store: &MemoryStore) -> Result<(), DomainError> {
    for restaurant in restaurants() {
        store.add_restaurant(restaurant)?;
    }
    store.categories.write().extend(categories());
    store.items.write().extend(items());
    Ok(())
}

fn restaurants() -> Vec<Restaurant> {
    let now = Utc::now();
    vec![
        Restaurant {
            id: "restaurant-1".to_string(),
            name: "Delicious AR Bistro".to_string(),
            description: "Experience fine dining in augmented reality".to_string(),
            logo: Some("/images/logo.png".to_string()),
            address: Some("123 Food Street, Gourmet City".to_string()),
            phone: Some("+1 (555) 123-4567".to_string()),
            website: Some("https://arbistro.com".to_string()),
            owner_id: "owner-1".to_string(),
            is_active: true,
            subscription_plan: SubscriptionPlan::Premium,
            qr_code_secret: Some("bistro-secret-123".to_string()),
            custom_domain: Some("bistro".to_string()),
            theme: Some(RestaurantTheme {
                primary_color: "#667eea".to_string(),
                secondary_color: "#764ba2".to_string(),
                background_color: "#f8f9fa".to_string(),
                font_family: "Roboto".to_string(),
                logo: Some("/images/bistro-logo.png".to_string()),
                banner_image: None,
            }),
            created_at: now,
            updated_at: None,
        },
        Restaurant {
            id: "restaurant-2".to_string(),
            name: "Cozy Café AR".to_string(),
            description: "Artisanal coffee and pastries in AR".to_string(),
            logo: Some("/images/cafe-logo.png".to_string()),
            address: Some("456 Coffee Lane, Brew Town".to_string()),
            phone: Some("+1 (555) 987-6543".to_string()),
            website: Some("https://cozycafe.com".to_string()),
            owner_id: "owner-2".to_string(),
            is_active: true,
            subscription_plan: SubscriptionPlan::Basic,
            qr_code_secret: Some("cafe-secret-456".to_string()),
            custom_domain: Some("cafe".to_string()),
            theme: Some(RestaurantTheme {
                primary_color: "#8B4513".to_string(),
                secondary_color: "#D2691E".to_string(),
                background_color: "#FFF8DC".to_string(),
                font_family: "Open Sans".to_string(),
                logo: Some("/images/cafe-logo.png".to_string()),
                banner_image: None,
            }),
            created_at: now,
            updated_at: None,
        },
    ]
}

fn category(id: &str, name: &str, description: &str, icon: &str, restaurant_id: &str, sort_order: i32) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        icon: Some(icon.to_string()),
        restaurant_id: restaurant_id.to_string(),
        sort_order: Some(sort_order),
    }
}

fn categories() -> Vec<MenuCategory> {
    vec![
        category("bistro-starters", "Starters", "Light bites to begin your journey", "🥗", "restaurant-1", 1),
        category("bistro-mains", "Main Course", "Hearty and satisfying dishes", "🍖", "restaurant-1", 2),
        category("bistro-desserts", "Desserts", "Sweet endings to your meal", "🍰", "restaurant-1", 3),
        category("bistro-drinks", "Beverages", "Refreshing drinks and cocktails", "🍷", "restaurant-1", 4),
        category("cafe-coffee", "Coffee", "Artisanal coffee blends", "☕", "restaurant-2", 1),
        category("cafe-pastries", "Pastries", "Fresh baked goods", "🥐", "restaurant-2", 2),
        category("cafe-sandwiches", "Sandwiches", "Gourmet sandwiches and wraps", "🥪", "restaurant-2", 3),
    ]
}

struct Dish {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cents: i64,
    image: &'static str,
    category: &'static str,
    restaurant_id: &'static str,
    model_3d: &'static str,
    allergens: &'static [&'static str],
    is_vegetarian: bool,
    is_vegan: bool,
    spicy_level: u8,
}

impl Dish {
    fn into_item(self) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Decimal::new(self.cents, 2),
            image: self.image.to_string(),
            category: self.category.to_string(),
            restaurant_id: self.restaurant_id.to_string(),
            model_3d: Some(self.model_3d.to_string()),
            allergens: self.allergens.iter().map(|a| a.to_string()).collect(),
            is_vegetarian: self.is_vegetarian,
            is_vegan: self.is_vegan,
            spicy_level: self.spicy_level,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

fn items() -> Vec<MenuItem> {
    let dishes = [
        Dish {
            id: "bistro-burger-deluxe",
            name: "AR Deluxe Burger",
            description: "Premium beef patty with aged cheddar, crispy bacon, fresh lettuce, tomato, and our signature sauce on a brioche bun",
            cents: 1899,
            image: "/images/Burger.jpg",
            category: "bistro-mains",
            restaurant_id: "restaurant-1",
            model_3d: "/models/burger.glb",
            allergens: &["gluten", "dairy"],
            is_vegetarian: false,
            is_vegan: false,
            spicy_level: 1,
        },
        Dish {
            id: "bistro-caesar-salad",
            name: "Interactive Caesar Salad",
            description: "Crisp romaine lettuce with parmesan cheese, herb croutons, and our house-made Caesar dressing",
            cents: 1299,
            image: "/images/Salad.jpg",
            category: "bistro-starters",
            restaurant_id: "restaurant-1",
            model_3d: "/models/salad.glb",
            allergens: &["dairy", "gluten"],
            is_vegetarian: true,
            is_vegan: false,
            spicy_level: 0,
        },
        Dish {
            id: "bistro-tiramisu",
            name: "AR Tiramisu",
            description: "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone cream",
            cents: 899,
            image: "/images/tiramisu.jpg",
            category: "bistro-desserts",
            restaurant_id: "restaurant-1",
            model_3d: "/models/tiramisu.glb",
            allergens: &["gluten", "dairy", "eggs"],
            is_vegetarian: true,
            is_vegan: false,
            spicy_level: 0,
        },
        Dish {
            id: "cafe-espresso",
            name: "AR Signature Espresso",
            description: "Rich, aromatic espresso with perfect crema",
            cents: 350,
            image: "/images/espresso.jpg",
            category: "cafe-coffee",
            restaurant_id: "restaurant-2",
            model_3d: "/models/coffee-cup.glb",
            allergens: &[],
            is_vegetarian: true,
            is_vegan: true,
            spicy_level: 0,
        },
        Dish {
            id: "cafe-croissant",
            name: "Buttery Croissant",
            description: "Flaky, buttery croissant baked fresh daily",
            cents: 425,
            image: "/images/croissant.jpg",
            category: "cafe-pastries",
            restaurant_id: "restaurant-2",
            model_3d: "/models/croissant.glb",
            allergens: &["gluten", "dairy"],
            is_vegetarian: true,
            is_vegan: false,
            spicy_level: 0,
        },
    ];

    dishes.into_iter().map(Dish::into_item).collect()
}
