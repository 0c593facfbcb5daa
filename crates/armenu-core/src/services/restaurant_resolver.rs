// ============================================================================
// ARMenu Core - Restaurant Resolver
// File: crates/armenu-core/src/services/restaurant_resolver.rs
// ============================================================================
//! Maps an inbound identifier to exactly one available restaurant

use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::{LookupChannel, Restaurant, RestaurantLookup};
use crate::error::DomainError;
use crate::repositories::RestaurantRepository;

/// Resolves restaurant ids, QR secrets and custom domains
#[derive(Clone)]
pub struct RestaurantResolver {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl RestaurantResolver {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    /// Resolve the request's identifier to an active restaurant.
    ///
    /// Only the highest-priority channel is consulted (id, then secret, then
    /// domain). A restaurant that exists but is switched off fails with
    /// `RestaurantInactive`, never `RestaurantNotFound`.
    pub async fn resolve(&self, lookup: &RestaurantLookup) -> Result<Restaurant, DomainError> {
        let channel = lookup.channel().ok_or_else(|| {
            warn!("Restaurant lookup without identifier");
            DomainError::MissingIdentifier
        })?;

        let found = match channel {
            LookupChannel::Id(id) => self.restaurants.find_by_id(id).await,
            LookupChannel::Secret(secret) => self.restaurants.find_by_secret(secret).await,
            LookupChannel::Domain(domain) => self.restaurants.find_by_domain(domain).await,
        }
        .map_err(|e| {
            error!("Restaurant lookup failed: {}", e);
            e
        })?;

        let restaurant = found.ok_or_else(|| {
            warn!("Restaurant not found via {:?}", channel);
            DomainError::RestaurantNotFound
        })?;

        if !restaurant.is_active {
            warn!("Restaurant {} resolved but inactive", restaurant.id);
            return Err(DomainError::RestaurantInactive);
        }

        debug!("Resolved restaurant {} via {:?}", restaurant.id, channel);
        Ok(restaurant)
    }

    /// Existence check by id, regardless of `is_active`.
    pub async fn find(&self, restaurant_id: &str) -> Result<Option<Restaurant>, DomainError> {
        self.restaurants.find_by_id(restaurant_id).await
    }

    /// The owner's active restaurants, for the dashboard picker.
    pub async fn restaurants_for_owner(&self, owner_id: &str) -> Result<Vec<Restaurant>, DomainError> {
        let restaurants = self.restaurants.find_by_owner(owner_id).await?;
        Ok(restaurants.into_iter().filter(|r| r.is_active).collect())
    }
}
