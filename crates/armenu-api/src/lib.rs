//! # ARMenu API
//! 
//! HTTP handlers, DTOs, response envelope and error mapping.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
