//! # ARMenu Shared
//! 
//! Configuration, telemetry, and small utilities shared by every ARMenu crate.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
