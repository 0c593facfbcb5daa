//! Owner dashboard restaurant listing

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use armenu_core::domain::Restaurant;
use armenu_core::error::DomainError;
use armenu_shared::utils::is_blank;

use crate::dto::OwnerQuery;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Owner restaurants handler - GET /api/restaurants?ownerId=
pub async fn list_owner_restaurants(
    State(state): State<AppState>,
    query: Result<Query<OwnerQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Restaurant>>>, ApiError> {
    let Query(query) = query?;
    let owner_id = query
        .owner_id
        .filter(|o| !is_blank(o))
        .ok_or_else(|| DomainError::ValidationError("ownerId is required".to_string()))?;

    let restaurants = state.resolver.restaurants_for_owner(&owner_id).await?;
    Ok(Json(ApiResponse::success(restaurants)))
}
