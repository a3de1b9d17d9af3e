//! Helper functions for creating specific error types

use super::types::SentimentError;

/// Helper constructors for the error variants
impl SentimentError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn rate_limit<S: Into<String>>(message: S) -> Self {
        Self::RateLimit(message.into())
    }

    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache(message.into())
    }

    pub fn model<S: Into<String>>(message: S) -> Self {
        Self::Model(message.into())
    }

    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code exposed to clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Auth(_) => "AUTH_ERROR",
            Self::RateLimit(_) => "RATE_LIMIT_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Model(_) => "MODEL_ERROR",
            Self::Service(_) => "SERVICE_ERROR",
            Self::Io(_) | Self::Yaml(_) | Self::Serialization(_) | Self::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Whether the error is the caller's fault (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Auth(_) | Self::RateLimit(_)
        )
    }
}
