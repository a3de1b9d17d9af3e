//! Error types for the sentiment gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum SentimentError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or invalid API key
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Request quota exceeded for the caller key
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Result cache fault; never fatal to a request
    #[error("Cache error: {0}")]
    Cache(String),

    /// Analyzer (model inference) failure
    #[error("Model error: {0}")]
    Model(String),

    /// Service lifecycle failure, such as a request after shutdown
    #[error("Service error: {0}")]
    Service(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
