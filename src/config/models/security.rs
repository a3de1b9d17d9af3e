//! API key configuration

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// API key security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Accepted API keys
    #[serde(default = "default_api_keys")]
    pub api_keys: BTreeSet<String>,
    /// Per-key request limits overriding the default window quota
    #[serde(default = "default_api_key_limits")]
    pub api_key_limits: HashMap<String, u32>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            api_keys: default_api_keys(),
            api_key_limits: default_api_key_limits(),
        }
    }
}

impl SecurityConfig {
    /// Limit for an API key, falling back to `default_limit`
    pub fn limit_for(&self, api_key: &str, default_limit: u32) -> u32 {
        self.api_key_limits
            .get(api_key)
            .copied()
            .unwrap_or(default_limit)
    }

    /// Validate security configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_keys.is_empty() {
            return Err("At least one API key must be configured".to_string());
        }

        if self.api_keys.iter().any(|key| key.trim().is_empty()) {
            return Err("API keys cannot be blank".to_string());
        }

        for (key, limit) in &self.api_key_limits {
            if !self.api_keys.contains(key) {
                return Err(format!("Rate limit configured for unknown API key '{}'", mask(key)));
            }
            if *limit == 0 {
                return Err(format!("Rate limit for API key '{}' must be greater than 0", mask(key)));
            }
        }

        Ok(())
    }
}

fn mask(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{}***", visible)
}

fn default_api_keys() -> BTreeSet<String> {
    ["dev-key-1", "dev-key-2"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_api_key_limits() -> HashMap<String, u32> {
    HashMap::from([
        ("dev-key-1".to_string(), 100),
        ("dev-key-2".to_string(), 200),
    ])
}
