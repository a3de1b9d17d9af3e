//! Service orchestration tests
//!
//! Validation, cache interplay and health transitions of `SentimentService`
//! over the real in-memory cache.

#[cfg(test)]
mod tests {
    use crate::common::assertions::SentimentResponseAssertions;
    use crate::common::{FailingCache, ScoreFactory, StubAnalyzer};
    use sentiment_gateway::core::types::ResponseStatus;
    use sentiment_gateway::core::{
        Analyzer, EmotionLabel, HealthStatus, ScoreCache, SentimentCache, SentimentService,
        TextValidator,
    };
    use sentiment_gateway::SentimentError;
    use std::sync::Arc;
    use std::time::Duration;

    fn cache(ttl_secs: u64) -> Arc<SentimentCache> {
        Arc::new(SentimentCache::new(
            Duration::from_secs(ttl_secs),
            Duration::from_secs(300),
        ))
    }

    // ==================== Cache Interplay ====================

    #[tokio::test]
    async fn test_repeated_text_is_served_from_cache() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let cache = cache(3600);
        let service = SentimentService::new(analyzer.clone(), Some(cache.clone()));

        let first = service.analyze("I love this").await.unwrap();
        let second = service.analyze("I love this").await.unwrap();

        assert_eq!(analyzer.calls(), 1);
        assert_eq!(first.scores, second.scores);
        assert_eq!(cache.stats().hits, 1);
        second.assert_sorted_desc();
        second.assert_top_label("joy");
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_shares_cache_entry() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let service = SentimentService::new(analyzer.clone(), Some(cache(3600)));

        let response = service.analyze("  I love this \n").await.unwrap();
        service.analyze("I love this").await.unwrap();

        assert_eq!(response.text, "I love this");
        assert_eq!(analyzer.calls(), 1);
    }

    #[tokio::test]
    async fn test_case_differences_are_distinct_entries() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let service = SentimentService::new(analyzer.clone(), Some(cache(3600)));

        service.analyze("Great").await.unwrap();
        service.analyze("great").await.unwrap();

        assert_eq!(analyzer.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_triggers_reanalysis() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let service = SentimentService::new(analyzer.clone(), Some(cache(60)));

        service.analyze("hello").await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        service.analyze("hello").await.unwrap();

        assert_eq!(analyzer.calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_failures_do_not_fail_requests() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let cache = FailingCache::new();
        let service = SentimentService::new(analyzer.clone(), Some(cache.clone()));

        let response = service.analyze("hello").await.unwrap();
        service.analyze("hello").await.unwrap();

        assert_eq!(response.status, ResponseStatus::Success);
        assert_eq!(analyzer.calls(), 2);
        assert_eq!(cache.gets(), 2);
        assert_eq!(cache.sets(), 2);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_calls_model() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let service = SentimentService::new(analyzer.clone(), None);

        service.analyze("hello").await.unwrap();
        service.analyze("hello").await.unwrap();

        assert_eq!(analyzer.calls(), 2);
    }

    // ==================== Failures ====================

    #[tokio::test]
    async fn test_model_failure_is_not_cached() {
        let analyzer = StubAnalyzer::failing("inference backend down");
        let cache = cache(3600);
        let service = SentimentService::new(analyzer.clone(), Some(cache.clone()));

        let err = service.analyze("hello").await.unwrap_err();
        assert!(matches!(err, SentimentError::Model(_)));
        assert!(service.analyze("hello").await.is_err());

        assert_eq!(analyzer.calls(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_text_never_reaches_model() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let service = SentimentService::new(analyzer.clone(), None)
            .with_validator(TextValidator::new(10));

        let empty = service.analyze("   ").await.unwrap_err();
        let long = service.analyze("x".repeat(11).as_str()).await.unwrap_err();

        assert!(matches!(empty, SentimentError::Validation(_)));
        assert!(matches!(long, SentimentError::Validation(_)));
        assert!(service.analyze("x".repeat(10).as_str()).await.is_ok());
        assert_eq!(analyzer.calls(), 1);
    }

    #[tokio::test]
    async fn test_response_carries_model_name() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::single(EmotionLabel::Anger, 0.7));
        let service = SentimentService::new(analyzer, None);

        let response = service.analyze("so annoying").await.unwrap();

        assert_eq!(response.model_name.as_deref(), Some("stub-model"));
        assert_eq!(response.message, "Analysis completed successfully");
        crate::assert_approx_eq!(response.scores[0].score, 0.7);
    }

    // ==================== Health and Lifecycle ====================

    #[tokio::test]
    async fn test_health_follows_model_state() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let service = SentimentService::new(analyzer.clone(), None);

        assert_eq!(service.health(), HealthStatus::Healthy);
        analyzer.set_loaded(false);
        assert_eq!(service.health(), HealthStatus::Degraded);
    }

    #[tokio::test]
    async fn test_shutdown_stops_sweep_and_reports_unhealthy() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let cache = cache(3600);
        let service = SentimentService::new(analyzer.clone(), Some(cache.clone()));

        service.start();
        assert!(cache.is_running());

        service.shutdown().await;
        service.shutdown().await;

        assert!(!cache.is_running());
        assert!(!analyzer.is_loaded());
        assert_eq!(service.health(), HealthStatus::Unhealthy);
    }

    #[tokio::test]
    async fn test_cache_seam_accepts_trait_objects() {
        let cache: Arc<dyn ScoreCache> = cache(3600);
        cache.set("hi", ScoreFactory::joyful()).unwrap();
        assert_eq!(cache.get("hi").unwrap().map(|s| s.len()), Some(3));
    }
}
