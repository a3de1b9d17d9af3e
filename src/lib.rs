//! # sentiment-gateway
//!
//! HTTP service exposing an emotion classification model with a TTL result
//! cache, API key authentication and per-key rate limiting.
//!
//! ## Request flow
//!
//! `validate -> authenticate -> rate limit -> cache lookup -> (hit: respond)
//! | (miss: analyze -> cache store -> respond)`
//!
//! ## Embedding the service
//!
//! ```rust,no_run
//! use sentiment_gateway::{Config, server::run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/sentiment.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::{
    Analyzer, EmotionLabel, EmotionScore, InferenceAnalyzer, RateLimiter, ScoreCache,
    SentimentCache, SentimentResponse, SentimentService,
};
pub use utils::error::{Result, SentimentError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
