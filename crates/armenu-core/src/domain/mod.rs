//! # ARMenu Core - Domain Module
//! 
//! Domain entities for the menu browsing backend.

pub mod restaurant;
pub mod menu_category;
pub mod menu_item;
pub mod menu_view;
pub mod timestamp;

// Re-export all entities and enums
pub use restaurant::{Restaurant, RestaurantLookup, LookupChannel, RestaurantTheme, SubscriptionPlan};
pub use menu_category::{MenuCategory, NewMenuCategory};
pub use menu_item::{MenuItem, MenuItemPatch, NewMenuItem, PriceInput};
pub use menu_view::{MenuFilter, MenuView};
