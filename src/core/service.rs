//! Request orchestration: validate, consult the cache, classify on miss

use crate::core::analyzer::Analyzer;
use crate::core::cache::ScoreCache;
use crate::core::types::{EmotionScore, HealthStatus, SentimentResponse};
use crate::core::validation::TextValidator;
use crate::utils::error::{Result, SentimentError};
use crate::utils::truncate_string;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

const LOG_PREVIEW_CHARS: usize = 50;

/// Sentiment analysis service
pub struct SentimentService {
    analyzer: Arc<dyn Analyzer>,
    cache: Option<Arc<dyn ScoreCache>>,
    validator: TextValidator,
    stopped: AtomicBool,
}

impl SentimentService {
    /// Create a service; pass `None` to disable caching
    pub fn new(analyzer: Arc<dyn Analyzer>, cache: Option<Arc<dyn ScoreCache>>) -> Self {
        Self {
            analyzer,
            cache,
            validator: TextValidator::default(),
            stopped: AtomicBool::new(false),
        }
    }

    pub fn with_validator(mut self, validator: TextValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn validator(&self) -> &TextValidator {
        &self.validator
    }

    pub fn model_name(&self) -> &str {
        self.analyzer.model_name()
    }

    pub fn is_model_loaded(&self) -> bool {
        self.analyzer.is_loaded()
    }

    /// Start background maintenance
    pub fn start(&self) {
        if let Some(cache) = &self.cache {
            cache.start();
        }
        info!(model = %self.analyzer.model_name(), "Sentiment service started");
    }

    /// Stop the cache sweep and release the analyzer
    pub async fn shutdown(&self) {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return;
        }

        info!("Shutting down sentiment service");
        if let Some(cache) = &self.cache {
            cache.stop().await;
        }
        self.analyzer.shutdown().await;
        info!("Sentiment service shutdown complete");
    }

    /// Analyze `text`, serving from the cache when possible
    pub async fn analyze(&self, text: &str) -> Result<SentimentResponse> {
        if self.stopped.load(Ordering::Acquire) {
            return Err(SentimentError::service("Service is shutting down"));
        }

        let text = self.validator.validate(text)?;
        let preview = truncate_string(text, LOG_PREVIEW_CHARS);

        if let Some(cache) = &self.cache {
            match cache.get(text) {
                Ok(Some(scores)) => {
                    debug!(text = %preview, "Cache hit");
                    return Ok(self.respond(text, scores));
                }
                Ok(None) => debug!(text = %preview, "Cache miss"),
                Err(e) => warn!(error = %e, "Cache lookup failed, treating as miss"),
            }
        }

        let scores = self.analyzer.analyze(text).await.map_err(|e| {
            error!(error = %e, text = %preview, "Sentiment analysis failed");
            e
        })?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(text, scores.clone()) {
                warn!(error = %e, "Failed to store result in cache");
            }
        }

        Ok(self.respond(text, scores))
    }

    /// Current health derived from analyzer state and lifecycle
    pub fn health(&self) -> HealthStatus {
        if self.stopped.load(Ordering::Acquire) {
            HealthStatus::Unhealthy
        } else if self.analyzer.is_loaded() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        }
    }

    fn respond(&self, text: &str, scores: Vec<EmotionScore>) -> SentimentResponse {
        SentimentResponse::success(
            text.to_string(),
            scores,
            Some(self.analyzer.model_name().to_string()),
        )
    }
}
