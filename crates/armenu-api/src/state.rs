use std::sync::Arc;

use armenu_core::repositories::{MenuCategoryRepository, MenuItemRepository, RestaurantRepository};
use armenu_core::services::{MenuMutationService, MenuQueryService, RestaurantResolver};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: RestaurantResolver,
    pub query: MenuQueryService,
    pub mutation: MenuMutationService,
}

impl AppState {
    /// Wire the services over one set of repositories.
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        categories: Arc<dyn MenuCategoryRepository>,
        items: Arc<dyn MenuItemRepository>,
    ) -> Self {
        let resolver = RestaurantResolver::new(restaurants);
        let query = MenuQueryService::new(items.clone(), categories.clone());
        let mutation = MenuMutationService::new(items, categories, resolver.clone());
        Self { resolver, query, mutation }
    }
}
