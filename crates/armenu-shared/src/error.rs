//! Application error types

use thiserror::Error;

/// Startup failures, before any request is served.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Store initialisation failed: {0}")]
    StoreInit(String),
}
