//! Restaurant repository trait (port)

use async_trait::async_trait;
use crate::domain::Restaurant;
use crate::error::DomainError;

/// Read access to restaurants. Every lookup is an exact match; inactive
/// restaurants are returned like any other.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>, DomainError>;
    async fn find_by_secret(&self, secret: &str) -> Result<Option<Restaurant>, DomainError>;
    async fn find_by_domain(&self, domain: &str) -> Result<Option<Restaurant>, DomainError>;
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Restaurant>, DomainError>;
}
