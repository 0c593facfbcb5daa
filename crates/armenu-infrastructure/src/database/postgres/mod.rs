//! PostgreSQL repository implementations

pub mod restaurant_repo_impl;
pub mod menu_category_repo_impl;
pub mod menu_item_repo_impl;

pub use restaurant_repo_impl::PgRestaurantRepository;
pub use menu_category_repo_impl::PgMenuCategoryRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;

use armenu_core::error::DomainError;
use tracing::error;

/// Any driver failure surfaces as `StoreUnavailable`.
pub(crate) fn store_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::StoreUnavailable(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
