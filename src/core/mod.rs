//! Core functionality
//!
//! Domain types, input validation, the result cache, the rate limiter,
//! the analyzer seam and the orchestrating service.

pub mod analyzer;
pub mod cache;
pub mod rate_limiter;
pub mod service;
pub mod types;
pub mod validation;

pub use analyzer::{Analyzer, InferenceAnalyzer};
pub use cache::{ScoreCache, SentimentCache};
pub use rate_limiter::{RateLimitDecision, RateLimiter};
pub use service::SentimentService;
pub use types::{
    EmotionLabel, EmotionScore, HealthResponse, HealthStatus, SentimentRequest, SentimentResponse,
};
pub use validation::TextValidator;
