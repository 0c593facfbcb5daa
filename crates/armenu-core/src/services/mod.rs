//! Domain services (business logic)

pub mod restaurant_resolver;
pub mod menu_query_service;
pub mod menu_mutation_service;

pub use restaurant_resolver::RestaurantResolver;
pub use menu_query_service::MenuQueryService;
pub use menu_mutation_service::MenuMutationService;

#[cfg(test)]
pub(crate) mod fixtures;
