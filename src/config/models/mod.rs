//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod app;
pub mod cache;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod rate_limit;
pub mod security;
pub mod server;

pub use app::*;
pub use cache::*;
pub use gateway::*;
pub use logging::*;
pub use model::*;
pub use rate_limit::*;
pub use security::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

pub fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

pub fn default_model_name() -> String {
    "SamLowe/roberta-base-go_emotions".to_string()
}

pub fn default_inference_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

pub fn default_cache_ttl_minutes() -> u64 {
    60
}

pub fn default_cleanup_interval_minutes() -> u64 {
    5
}

pub fn default_requests_per_window() -> u32 {
    60
}

pub fn default_window_seconds() -> u64 {
    60
}

pub fn default_health_requests_per_window() -> u32 {
    10
}

pub fn default_limiter_cleanup_seconds() -> u64 {
    60
}

pub fn default_max_text_length() -> usize {
    1000
}

pub(crate) fn default_true() -> bool {
    true
}
