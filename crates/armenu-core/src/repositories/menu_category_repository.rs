//! Menu category repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuCategory;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuCategoryRepository: Send + Sync {
    /// All categories of a restaurant in insertion order.
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuCategory>, DomainError>;

    /// Appends a category. Fails with `CategoryAlreadyExists` when the
    /// `(id, restaurant_id)` pair is taken.
    async fn insert(&self, category: &MenuCategory) -> Result<MenuCategory, DomainError>;
}
