//! Repository traits (ports)

pub mod restaurant_repository;
pub mod menu_category_repository;
pub mod menu_item_repository;

pub use restaurant_repository::RestaurantRepository;
pub use menu_category_repository::MenuCategoryRepository;
pub use menu_item_repository::MenuItemRepository;

#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
#[cfg(test)]
pub use menu_category_repository::MockMenuCategoryRepository;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
