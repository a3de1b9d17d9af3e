//! API key authentication

use super::helpers::constant_time_eq;
use crate::config::SecurityConfig;
use crate::utils::error::{Result, SentimentError};
use std::collections::HashMap;

/// Accepted API keys and their per-key quotas
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    keys: Vec<String>,
    limits: HashMap<String, u32>,
}

impl ApiKeyAuth {
    pub fn new<I: IntoIterator<Item = String>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            limits: HashMap::new(),
        }
    }

    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            keys: config.api_keys.iter().cloned().collect(),
            limits: config.api_key_limits.clone(),
        }
    }

    pub fn with_limit(mut self, key: &str, limit: u32) -> Self {
        self.limits.insert(key.to_string(), limit);
        self
    }

    /// Validate a presented key, returning the matching configured key.
    ///
    /// Every configured key is compared so timing does not reveal which
    /// one matched.
    pub fn authenticate(&self, provided: Option<&str>) -> Result<&str> {
        let provided = provided.ok_or_else(|| SentimentError::auth("Missing API key"))?;

        let mut matched = None;
        for key in &self.keys {
            if constant_time_eq(key, provided) && matched.is_none() {
                matched = Some(key.as_str());
            }
        }

        matched.ok_or_else(|| SentimentError::auth("Invalid API key"))
    }

    /// Quota for `key`, falling back to `default_limit`
    pub fn limit_for(&self, key: &str, default_limit: u32) -> u32 {
        self.limits.get(key).copied().unwrap_or(default_limit)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
