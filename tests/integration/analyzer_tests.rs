//! Inference client tests against a mock HTTP endpoint

#[cfg(test)]
mod tests {
    use sentiment_gateway::config::{InferenceConfig, ModelConfig};
    use sentiment_gateway::core::{
        Analyzer, EmotionLabel, InferenceAnalyzer, SentimentCache, SentimentService,
    };
    use sentiment_gateway::SentimentError;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "test-org/emotions";

    fn model_config(server: &MockServer) -> ModelConfig {
        ModelConfig {
            model_name: MODEL.to_string(),
            inference: InferenceConfig {
                base_url: server.uri(),
                api_token: Some("hf_test_token".to_string()),
                timeout_seconds: Some(5),
                top_k: None,
            },
            ..Default::default()
        }
    }

    fn predictions() -> serde_json::Value {
        json!([[
            {"label": "gratitude", "score": 0.82},
            {"label": "joy", "score": 0.11},
            {"label": "neutral", "score": 0.07}
        ]])
    }

    #[tokio::test]
    async fn test_analyze_parses_nested_predictions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{}", MODEL)))
            .and(header("authorization", "Bearer hf_test_token"))
            .and(body_partial_json(json!({"inputs": "thank you so much"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(predictions()))
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = InferenceAnalyzer::new(&model_config(&server)).unwrap();
        let scores = analyzer.analyze("thank you so much").await.unwrap();

        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].label, EmotionLabel::Gratitude);
        assert_eq!(analyzer.model_name(), MODEL);
    }

    #[tokio::test]
    async fn test_analyze_sends_top_k_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"parameters": {"top_k": 28}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(predictions()))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = model_config(&server);
        config.inference.top_k = Some(28);
        let analyzer = InferenceAnalyzer::new(&config).unwrap();

        assert!(analyzer.analyze("hi").await.is_ok());
    }

    #[tokio::test]
    async fn test_upstream_error_becomes_model_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let analyzer = InferenceAnalyzer::new(&model_config(&server)).unwrap();
        let err = analyzer.analyze("hello").await.unwrap_err();

        assert!(matches!(err, SentimentError::Model(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_empty_predictions_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[]])))
            .mount(&server)
            .await;

        let analyzer = InferenceAnalyzer::new(&model_config(&server)).unwrap();
        let err = analyzer.analyze("hello").await.unwrap_err();

        assert!(err.to_string().contains("No valid sentiment predictions"));
    }

    #[tokio::test]
    async fn test_unknown_label_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"label": "LABEL_0", "score": 0.9}])),
            )
            .mount(&server)
            .await;

        let analyzer = InferenceAnalyzer::new(&model_config(&server)).unwrap();
        assert!(matches!(
            analyzer.analyze("hello").await,
            Err(SentimentError::Model(_))
        ));
    }

    #[tokio::test]
    async fn test_shutdown_unloads_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(predictions()))
            .expect(0)
            .mount(&server)
            .await;

        let analyzer = InferenceAnalyzer::new(&model_config(&server)).unwrap();
        assert!(analyzer.is_loaded());

        analyzer.shutdown().await;

        assert!(!analyzer.is_loaded());
        assert!(analyzer.analyze("hello").await.is_err());
    }

    #[tokio::test]
    async fn test_service_calls_endpoint_once_for_repeated_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(predictions()))
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = Arc::new(InferenceAnalyzer::new(&model_config(&server)).unwrap());
        let cache = Arc::new(SentimentCache::new(
            Duration::from_secs(3600),
            Duration::from_secs(300),
        ));
        let service = SentimentService::new(analyzer, Some(cache));

        let first = service.analyze("much appreciated").await.unwrap();
        let second = service.analyze("much appreciated").await.unwrap();

        assert_eq!(first.scores, second.scores);
        assert_eq!(first.model_name.as_deref(), Some(MODEL));
    }
}
