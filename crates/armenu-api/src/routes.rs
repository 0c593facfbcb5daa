// ============================================================================
// ARMenu API - Router
// File: crates/armenu-api/src/routes.rs
// ============================================================================

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{health, menu, restaurants};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/menu",
            get(menu::get_menu)
                .post(menu::create_item)
                .put(menu::update_item)
                .delete(menu::delete_item),
        )
        .route("/api/menu/categories", post(menu::create_category))
        .route("/api/restaurants", get(restaurants::list_owner_restaurants))
        .with_state(state)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
