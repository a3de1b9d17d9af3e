//! Emotion classifier abstraction
//!
//! The service only depends on [`Analyzer`]; the shipped implementation
//! calls a hosted inference endpoint over HTTP.

mod inference;

pub use inference::InferenceAnalyzer;

use crate::core::types::EmotionScore;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Text classifier producing at least one labelled score per input
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Identifier of the underlying model
    fn model_name(&self) -> &str;

    /// Whether the model is ready to serve
    fn is_loaded(&self) -> bool;

    /// Classify `text`. A successful result is never empty.
    async fn analyze(&self, text: &str) -> Result<Vec<EmotionScore>>;

    /// Release model resources; later calls to `analyze` fail
    async fn shutdown(&self);
}
