//! HTTP inference client (Hugging Face Inference API wire format)

use super::Analyzer;
use crate::config::ModelConfig;
use crate::core::types::{EmotionLabel, EmotionScore};
use crate::utils::error::{Result, SentimentError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Analyzer backed by a remote text-classification endpoint
pub struct InferenceAnalyzer {
    client: Client,
    endpoint: String,
    model_name: String,
    api_token: Option<String>,
    top_k: Option<usize>,
    loaded: AtomicBool,
}

impl InferenceAnalyzer {
    /// Create a client from model configuration
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.inference.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SentimentError::config(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/models/{}",
            config.inference.base_url.trim_end_matches('/'),
            config.model_name
        );

        info!(model = %config.model_name, endpoint = %endpoint, "Inference analyzer ready");

        Ok(Self {
            client,
            endpoint,
            model_name: config.model_name.clone(),
            api_token: config.inference.api_token.clone(),
            top_k: config.inference.top_k,
            loaded: AtomicBool::new(true),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, text: &str) -> Value {
        let mut body = json!({
            "inputs": text,
            "options": { "wait_for_model": true },
        });
        if let Some(top_k) = self.top_k {
            body["parameters"] = json!({ "top_k": top_k });
        }
        body
    }
}

#[async_trait]
impl Analyzer for InferenceAnalyzer {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    async fn analyze(&self, text: &str) -> Result<Vec<EmotionScore>> {
        if !self.is_loaded() {
            return Err(SentimentError::model("Model is not loaded"));
        }

        let mut request = self.client.post(&self.endpoint).json(&self.request_body(text));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SentimentError::model(format!("Inference request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Inference endpoint returned an error");
            return Err(SentimentError::model(format!(
                "Inference endpoint returned {}: {}",
                status, body
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| SentimentError::model(format!("Invalid inference response: {}", e)))?;

        let scores = parse_predictions(&payload)?;
        debug!(count = scores.len(), "Inference returned predictions");
        Ok(scores)
    }

    async fn shutdown(&self) {
        if self.loaded.swap(false, Ordering::AcqRel) {
            info!(model = %self.model_name, "Inference analyzer released");
        }
    }
}

/// Convert a classification payload into scores.
///
/// Accepts `[[{label, score}, ...]]` or `[{label, score}, ...]`. Entries
/// missing either field are skipped.
pub(crate) fn parse_predictions(payload: &Value) -> Result<Vec<EmotionScore>> {
    let outer = payload
        .as_array()
        .ok_or_else(|| SentimentError::model("Invalid model output format"))?;

    let predictions = match outer.first() {
        Some(Value::Array(inner)) => inner,
        _ => outer,
    };

    let mut scores = Vec::with_capacity(predictions.len());
    for prediction in predictions {
        let label = prediction.get("label").and_then(Value::as_str);
        let score = prediction.get("score").and_then(Value::as_f64);
        let (Some(label), Some(score)) = (label, score) else {
            continue;
        };

        let label: EmotionLabel = label.parse().map_err(SentimentError::model)?;
        if !(0.0..=1.0).contains(&score) {
            return Err(SentimentError::model(format!(
                "Score {} for '{}' is outside [0, 1]",
                score, label
            )));
        }
        scores.push(EmotionScore::new(label, score));
    }

    if scores.is_empty() {
        return Err(SentimentError::model("No valid sentiment predictions"));
    }

    Ok(scores)
}
