//! Environment overrides for the file-based configuration

use super::models::*;
use crate::utils::error::{Result, SentimentError};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.app.environment = environment.parse().map_err(SentimentError::config)?;
        }
        if let Some(debug) = lookup("DEBUG") {
            self.app.debug = parse_var("DEBUG", &debug)?;
        }

        // Server
        if let Some(host) = lookup("SENTIMENT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SENTIMENT_PORT") {
            self.server.port = parse_var("SENTIMENT_PORT", &port)?;
        }

        // Security
        if let Some(keys) = lookup("API_KEYS") {
            self.security.api_keys = split_list(&keys).collect();
            self.security
                .api_key_limits
                .retain(|key, _| self.security.api_keys.contains(key));
        }

        // Model
        if let Some(model_name) = lookup("MODEL_NAME") {
            self.model.model_name = model_name;
        }
        if let Some(base_url) = lookup("INFERENCE_BASE_URL") {
            self.model.inference.base_url = base_url;
        }
        if let Some(token) = lookup("INFERENCE_API_TOKEN") {
            self.model.inference.api_token = Some(token).filter(|t| !t.is_empty());
        }

        // Cache
        if let Some(ttl) = lookup("CACHE_TTL_MINUTES") {
            self.cache.ttl_minutes = parse_var("CACHE_TTL_MINUTES", &ttl)?;
        }
        if let Some(interval) = lookup("CACHE_CLEANUP_INTERVAL_MINUTES") {
            self.cache.cleanup_interval_minutes =
                parse_var("CACHE_CLEANUP_INTERVAL_MINUTES", &interval)?;
        }

        // Rate limiting
        if let Some(requests) = lookup("RATE_LIMIT_REQUESTS") {
            self.rate_limit.requests_per_window = parse_var("RATE_LIMIT_REQUESTS", &requests)?;
        }
        if let Some(window) = lookup("RATE_LIMIT_WINDOW_SECONDS") {
            self.rate_limit.window_seconds = parse_var("RATE_LIMIT_WINDOW_SECONDS", &window)?;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = Some(format.parse().map_err(SentimentError::config)?);
        }

        debug!("Applied environment overrides");
        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| SentimentError::config(format!("Invalid {}: {}", name, e)))
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
