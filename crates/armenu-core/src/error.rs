//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Restaurant identifier required (restaurantId, r or domain)")]
    MissingIdentifier,

    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("Restaurant is not currently available")]
    RestaurantInactive,

    #[error("Item not found")]
    ItemNotFound,

    #[error("Item already exists in restaurant {restaurant_id}: {item_id}")]
    ItemAlreadyExists { restaurant_id: String, item_id: String },

    #[error("Category already exists in restaurant {restaurant_id}: {category_id}")]
    CategoryAlreadyExists { restaurant_id: String, category_id: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
