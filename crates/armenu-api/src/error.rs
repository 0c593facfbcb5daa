// ============================================================================
// ARMenu API - Error Mapping
// File: crates/armenu-api/src/error.rs
// ============================================================================
//! Domain failures to HTTP status codes and the error envelope

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use armenu_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body or query string could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => match e {
                DomainError::MissingIdentifier => StatusCode::BAD_REQUEST,
                DomainError::RestaurantNotFound => StatusCode::NOT_FOUND,
                DomainError::RestaurantInactive => StatusCode::FORBIDDEN,
                DomainError::ItemNotFound => StatusCode::NOT_FOUND,
                DomainError::ItemAlreadyExists { .. } => StatusCode::CONFLICT,
                DomainError::CategoryAlreadyExists { .. } => StatusCode::CONFLICT,
                DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
                DomainError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Domain(e) => match e {
                DomainError::MissingIdentifier => "MISSING_IDENTIFIER",
                DomainError::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
                DomainError::RestaurantInactive => "RESTAURANT_INACTIVE",
                DomainError::ItemNotFound => "ITEM_NOT_FOUND",
                DomainError::ItemAlreadyExists { .. } => "ITEM_ALREADY_EXISTS",
                DomainError::CategoryAlreadyExists { .. } => "CATEGORY_ALREADY_EXISTS",
                DomainError::ValidationError(_) => "VALIDATION_ERROR",
                DomainError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            },
            ApiError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // driver details stay in the log
            tracing::error!("Request failed: {}", self);
            "Menu store is temporarily unavailable".to_string()
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
            self.to_string()
        };

        let body = Json(ApiResponse::<()>::error(self.code(), &message));
        (status, body).into_response()
    }
}
