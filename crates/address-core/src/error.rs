//! Error types for the address validator

use thiserror::Error;

/// Main error type for all validator operations
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported country: {0}")]
    UnsupportedCountry(String),

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Primary validator failed: {0}")]
    Primary(String),
}

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;
