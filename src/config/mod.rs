//! Configuration management for the service
//!
//! Configuration is read from an optional YAML file, then overridden by
//! environment variables, then validated as a whole.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{Result, SentimentError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SentimentError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| SentimentError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults and environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut gateway = GatewayConfig::default();
        gateway.apply_env()?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut gateway = match path {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    SentimentError::Config(format!("Failed to read config file: {}", e))
                })?;
                serde_yaml::from_str(&content)
                    .map_err(|e| SentimentError::Config(format!("Failed to parse config: {}", e)))?
            }
            None => GatewayConfig::default(),
        };

        gateway.apply_env()?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    pub fn app(&self) -> &AppConfig {
        &self.gateway.app
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    pub fn model(&self) -> &ModelConfig {
        &self.gateway.model
    }

    pub fn cache(&self) -> &CacheConfig {
        &self.gateway.cache
    }

    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    pub fn security(&self) -> &SecurityConfig {
        &self.gateway.security
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .validate()
            .map_err(|e| SentimentError::Config(format!("Invalid configuration: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Apply command line host and port overrides, then revalidate
    pub fn apply_server_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<()> {
        if let Some(host) = host {
            self.gateway.server.host = host;
        }
        if let Some(port) = port {
            self.gateway.server.port = port;
        }
        self.validate()
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.gateway).map_err(|e| {
            SentimentError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway).map_err(|e| {
            SentimentError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}

impl From<GatewayConfig> for Config {
    fn from(gateway: GatewayConfig) -> Self {
        Self { gateway }
    }
}
