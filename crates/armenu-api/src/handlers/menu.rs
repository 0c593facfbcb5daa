// ============================================================================
// ARMenu API - Menu Handlers
// File: crates/armenu-api/src/handlers/menu.rs
// ============================================================================
//! Customer menu reads and owner item writes under `/api/menu`

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use armenu_core::domain::{MenuCategory, NewMenuCategory, NewMenuItem};

use crate::dto::{
    DeleteResponse, ItemKeyQuery, ItemMutationResponse, ItemResponse, MenuQuery, MenuResponse,
    UpdateItemRequest,
};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Either the filtered menu or, when `id` is given, one item.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MenuPayload {
    Menu(MenuResponse),
    Item(ItemResponse),
}

/// Menu handler - GET /api/menu
pub async fn get_menu(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<MenuPayload>>, ApiError> {
    let Query(query) = query?;

    let restaurant = state.resolver.resolve(&query.lookup()).await?;
    let info = query.include_info().then(|| restaurant.clone());

    if let Some(id) = query.item_id() {
        let item = state.query.get_item(id, &restaurant.id).await?;
        return Ok(Json(ApiResponse::success(MenuPayload::Item(ItemResponse {
            item,
            restaurant: info,
        }))));
    }

    let view = state.query.query_menu(&restaurant.id, &query.filter()).await?;
    let total = view.total();
    Ok(Json(ApiResponse::success(MenuPayload::Menu(MenuResponse {
        items: view.items,
        categories: view.categories,
        total,
        restaurant: info,
    }))))
}

/// Create item handler - POST /api/menu
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewMenuItem>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ItemMutationResponse>>), ApiError> {
    let Json(payload) = payload?;

    let item = state.mutation.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ItemMutationResponse {
            message: "Menu item created successfully".to_string(),
            item,
        })),
    ))
}

/// Update item handler - PUT /api/menu
pub async fn update_item(
    State(state): State<AppState>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ItemMutationResponse>>, ApiError> {
    let Json(request) = payload?;
    let id = request.id.unwrap_or_default();
    let restaurant_id = request.restaurant_id.unwrap_or_default();

    let item = state.mutation.update(&id, &restaurant_id, &request.patch).await?;
    Ok(Json(ApiResponse::success(ItemMutationResponse {
        message: "Menu item updated successfully".to_string(),
        item,
    })))
}

/// Delete item handler - DELETE /api/menu?id=&restaurantId=
pub async fn delete_item(
    State(state): State<AppState>,
    query: Result<Query<ItemKeyQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<DeleteResponse>>, ApiError> {
    let Query(key) = query?;
    let id = key.id.unwrap_or_default();
    let restaurant_id = key.restaurant_id.unwrap_or_default();

    let success = state.mutation.delete(&id, &restaurant_id).await?;
    Ok(Json(ApiResponse::success(DeleteResponse {
        message: "Menu item deleted successfully".to_string(),
        success,
    })))
}

/// Create category handler - POST /api/menu/categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<NewMenuCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MenuCategory>>), ApiError> {
    let Json(payload) = payload?;

    let category = state.mutation.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(category))))
}
