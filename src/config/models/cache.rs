//! Result cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for TTL and sweep interval (one year)
pub const MAX_CACHE_MINUTES: u64 = 365 * 24 * 60;

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable result caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Entry lifetime in minutes
    #[serde(default = "default_cache_ttl_minutes")]
    pub ttl_minutes: u64,
    /// Minutes between background sweeps
    #[serde(default = "default_cleanup_interval_minutes")]
    pub cleanup_interval_minutes: u64,
    /// Optional bound on stored entries; the oldest entry is evicted when full.
    /// Soft under concurrent writers of new keys.
    #[serde(default)]
    pub max_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_minutes: default_cache_ttl_minutes(),
            cleanup_interval_minutes: default_cleanup_interval_minutes(),
            max_entries: None,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes.saturating_mul(60))
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_minutes.saturating_mul(60))
    }

    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ttl_minutes == 0 {
            return Err("Cache TTL must be at least one minute".to_string());
        }
        if self.cleanup_interval_minutes == 0 {
            return Err("Cache cleanup interval must be at least one minute".to_string());
        }
        if self.ttl_minutes > MAX_CACHE_MINUTES {
            return Err(format!("Cache TTL cannot exceed {} minutes", MAX_CACHE_MINUTES));
        }
        if self.cleanup_interval_minutes > MAX_CACHE_MINUTES {
            return Err(format!(
                "Cache cleanup interval cannot exceed {} minutes",
                MAX_CACHE_MINUTES
            ));
        }
        if self.max_entries == Some(0) {
            return Err("Cache max_entries cannot be 0".to_string());
        }
        Ok(())
    }
}
