//! Menu item repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuItem;
use crate::error::DomainError;

/// Every per-item operation is keyed by `(id, restaurant_id)`. Each write is
/// applied atomically with respect to concurrent readers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// All items of a restaurant, active and soft-deleted, in insertion order.
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, DomainError>;

    async fn find(&self, id: &str, restaurant_id: &str) -> Result<Option<MenuItem>, DomainError>;

    /// Appends an item. Fails with `ItemAlreadyExists` when the key is taken.
    async fn insert(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;

    /// Swaps the whole stored record for `item`. Fails with `ItemNotFound`
    /// when no record has the same key.
    async fn replace(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;

    /// Soft delete: clears `is_active` and moves `updated_at` strictly
    /// forward. Returns `false` when no record has the key.
    async fn mark_inactive(&self, id: &str, restaurant_id: &str) -> Result<bool, DomainError>;
}
