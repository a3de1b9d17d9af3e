//! Sentiment result cache
//!
//! Exact-text keyed store of classifier output with a fixed time-to-live.
//! Expired entries are removed lazily on lookup and by a background sweep.

mod store;
mod types;


pub use store::SentimentCache;
pub use types::{CacheEntry, CacheStats};

use crate::core::types::EmotionScore;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage seam used by the service.
///
/// Errors from either operation are never fatal to a request.
#[async_trait]
pub trait ScoreCache: Send + Sync {
    /// Scores for `text` if present and not expired
    fn get(&self, text: &str) -> Result<Option<Vec<EmotionScore>>>;

    /// Insert or replace the scores for `text`
    fn set(&self, text: &str, scores: Vec<EmotionScore>) -> Result<()>;

    /// Start background maintenance
    fn start(&self) {}

    /// Stop background maintenance
    async fn stop(&self) {}
}
