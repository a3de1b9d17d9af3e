//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for window and purge interval (one year)
pub const MAX_WINDOW_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requests allowed per key in one window
    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: u32,
    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
    /// Requests allowed per client IP on the health endpoint
    #[serde(default = "default_health_requests_per_window")]
    pub health_requests_per_window: u32,
    /// Seconds between purges of expired windows
    #[serde(default = "default_limiter_cleanup_seconds")]
    pub cleanup_interval_seconds: u64,
    /// Optional bound on tracked keys; soft under concurrent first requests
    #[serde(default)]
    pub max_tracked_keys: Option<usize>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_window: default_requests_per_window(),
            window_seconds: default_window_seconds(),
            health_requests_per_window: default_health_requests_per_window(),
            cleanup_interval_seconds: default_limiter_cleanup_seconds(),
            max_tracked_keys: None,
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_seconds)
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_seconds == 0 {
            return Err("Rate limit window must be at least one second".to_string());
        }
        if self.cleanup_interval_seconds == 0 {
            return Err("Rate limit cleanup interval must be at least one second".to_string());
        }
        if self.window_seconds > MAX_WINDOW_SECONDS {
            return Err(format!(
                "Rate limit window cannot exceed {} seconds",
                MAX_WINDOW_SECONDS
            ));
        }
        if self.cleanup_interval_seconds > MAX_WINDOW_SECONDS {
            return Err(format!(
                "Rate limit cleanup interval cannot exceed {} seconds",
                MAX_WINDOW_SECONDS
            ));
        }
        if self.enabled && self.requests_per_window == 0 {
            return Err("requests_per_window must be greater than 0".to_string());
        }
        if self.max_tracked_keys == Some(0) {
            return Err("max_tracked_keys cannot be 0".to_string());
        }
        Ok(())
    }
}
