//! Top-level configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Application metadata and environment
    #[serde(default)]
    pub app: AppConfig,
    /// HTTP server
    #[serde(default)]
    pub server: ServerConfig,
    /// Model and inference backend
    #[serde(default)]
    pub model: ModelConfig,
    /// Result cache
    #[serde(default)]
    pub cache: CacheConfig,
    /// Rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// API keys
    #[serde(default)]
    pub security: SecurityConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.app.validate()?;
        self.server.validate()?;
        self.model.validate()?;
        self.cache.validate()?;
        self.rate_limit.validate()?;
        self.security.validate()?;
        Ok(())
    }
}
