use thiserror::Error;

/// Errors that can occur while talking to the recipe API or managing local state
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure while calling the recipe API
    #[error("Failed to reach recipe API: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The requested recipe does not exist
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// The API answered with something we could not use
    #[error("Unexpected API response: {0}")]
    ApiError(String),

    /// Failed to read or write persisted state
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Failed to encode or decode persisted state
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// A user command could not be understood
    #[error("Could not parse command: {0}")]
    ParseError(String),
}
