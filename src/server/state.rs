//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::rate_limiter::RateLimiter;
use crate::core::service::SentimentService;
use crate::server::middleware::ApiKeyAuth;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Built once at startup; every field is behind an `Arc` so worker threads
/// share the same cache, limiters and analyzer.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Sentiment orchestration service
    pub service: Arc<SentimentService>,
    /// Limiter for the analysis endpoint
    pub api_limiter: Arc<RateLimiter>,
    /// IP-keyed limiter for the health endpoint
    pub health_limiter: Arc<RateLimiter>,
    /// Accepted API keys
    pub api_keys: Arc<ApiKeyAuth>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        service: SentimentService,
        api_limiter: RateLimiter,
        health_limiter: RateLimiter,
    ) -> Self {
        let api_keys = ApiKeyAuth::from_config(config.security());
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
            api_limiter: Arc::new(api_limiter),
            health_limiter: Arc::new(health_limiter),
            api_keys: Arc::new(api_keys),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start background tasks
    pub fn start(&self) {
        self.service.start();
        self.api_limiter.start_cleanup_task();
        self.health_limiter.start_cleanup_task();
    }

    /// Stop background tasks and release the analyzer
    pub async fn shutdown(&self) {
        self.service.shutdown().await;
        self.api_limiter.stop().await;
        self.health_limiter.stop().await;
    }
}
