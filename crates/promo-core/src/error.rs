//! Unified error types for promo

use thiserror::Error;

/// Unified error type for all promo operations
#[derive(Error, Debug)]
pub enum PromoError {
    // Generation capability errors
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("API rate limit: {0}")]
    ApiLimit(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    // Workflow errors
    #[error("Workflow error: {0}")]
    Workflow(String),

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PromoError
pub type Result<T> = std::result::Result<T, PromoError>;
