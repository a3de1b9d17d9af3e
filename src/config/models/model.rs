//! Model and inference backend configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier reported in responses and used in the inference URL
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Maximum accepted text length in characters
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    /// Inference backend
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            max_text_length: default_max_text_length(),
            inference: InferenceConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        self.inference.validate()
    }
}

/// HTTP inference backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference API
    #[serde(default = "default_inference_base_url")]
    pub base_url: String,
    /// Bearer token sent with inference requests
    #[serde(default, skip_serializing)]
    pub api_token: Option<String>,
    /// Request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Number of labels requested from the model
    #[serde(default)]
    pub top_k: Option<usize>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_inference_base_url(),
            api_token: None,
            timeout_seconds: None,
            top_k: None,
        }
    }
}

impl InferenceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Validate inference configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "Inference base_url must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_seconds == Some(0) {
            return Err("Inference timeout must be greater than 0".to_string());
        }
        if self.top_k == Some(0) {
            return Err("top_k must be greater than 0".to_string());
        }
        Ok(())
    }
}
