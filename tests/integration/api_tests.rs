//! HTTP API tests
//!
//! Requests go through the full application: middleware, JSON extraction,
//! authentication, rate limiting and the service.

#[cfg(test)]
mod tests {
    use crate::common::assertions::SentimentResponseAssertions;
    use crate::common::fixtures::{LIMITED_KEY, TEST_KEY};
    use crate::common::{ConfigFactory, ScoreFactory, StubAnalyzer};
    use actix_web::{test, web};
    use sentiment_gateway::Config;
    use sentiment_gateway::core::{HealthResponse, HealthStatus, SentimentResponse};
    use sentiment_gateway::server::{AppState, HttpServer, build_state};
    use serde_json::{Value, json};
    use std::sync::Arc;

    const ANALYZE: &str = "/api/v1/sentiment/analyze";
    const HEALTH: &str = "/api/v1/health";

    fn state(config: &Config, analyzer: Arc<StubAnalyzer>) -> web::Data<AppState> {
        web::Data::new(build_state(config, analyzer))
    }

    fn analyze_request(api_key: Option<&str>, text: &str) -> test::TestRequest {
        let req = test::TestRequest::post()
            .uri(ANALYZE)
            .set_json(json!({ "text": text }));
        match api_key {
            Some(key) => req.insert_header(("x-api-key", key)),
            None => req,
        }
    }

    // ==================== Authentication ====================

    #[actix_web::test]
    async fn test_missing_api_key_is_unauthorized() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer.clone(),
        )))
        .await;

        let resp = test::call_service(&app, analyze_request(None, "hello").to_request()).await;

        let body = crate::assert_error_code!(resp, 401, "AUTH_ERROR");
        assert_eq!(body.error.message, "Missing API key");
        assert_eq!(analyzer.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_api_key_is_unauthorized() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer.clone(),
        )))
        .await;

        let req = analyze_request(Some("wrong-key"), "hello").to_request();
        let resp = test::call_service(&app, req).await;

        let body = crate::assert_error_code!(resp, 401, "AUTH_ERROR");
        assert_eq!(body.error.message, "Invalid API key");
        assert_eq!(analyzer.calls(), 0);
    }

    // ==================== Validation ====================

    #[actix_web::test]
    async fn test_empty_text_is_rejected_before_auth() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer.clone(),
        )))
        .await;

        let resp = test::call_service(&app, analyze_request(None, "   ").to_request()).await;

        crate::assert_error_code!(resp, 422, "VALIDATION_ERROR");
        assert_eq!(analyzer.calls(), 0);
    }

    #[actix_web::test]
    async fn test_overlong_text_is_rejected() {
        let mut config = ConfigFactory::create();
        config.gateway.model.max_text_length = 20;
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app =
            test::init_service(HttpServer::create_app(state(&config, analyzer.clone()))).await;

        let long = "a".repeat(21);
        let resp =
            test::call_service(&app, analyze_request(Some(TEST_KEY), &long).to_request()).await;

        let body = crate::assert_error_code!(resp, 422, "VALIDATION_ERROR");
        assert!(body.error.message.contains("20"));
    }

    #[actix_web::test]
    async fn test_missing_text_field_is_rejected() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        let req = test::TestRequest::post()
            .uri(ANALYZE)
            .insert_header(("x-api-key", TEST_KEY))
            .set_json(json!({ "content": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        crate::assert_error_code!(resp, 422, "VALIDATION_ERROR");
    }

    // ==================== Analysis ====================

    #[actix_web::test]
    async fn test_successful_analysis() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer.clone(),
        )))
        .await;

        let req = analyze_request(Some(TEST_KEY), "  What a wonderful day  ").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.headers().get("x-ratelimit-limit").unwrap(), "5");
        assert_eq!(resp.headers().get("x-ratelimit-remaining").unwrap(), "4");

        let body: SentimentResponse = test::read_body_json(resp).await;
        assert_eq!(body.text, "What a wonderful day");
        assert_eq!(body.scores.len(), 3);
        body.assert_sorted_desc();
        body.assert_top_label("joy");
    }

    #[actix_web::test]
    async fn test_response_json_shape() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        let resp =
            test::call_service(&app, analyze_request(Some(TEST_KEY), "hi").to_request()).await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["scores"][0]["label"], "joy");
        assert_eq!(body["model_name"], "stub-model");
    }

    #[actix_web::test]
    async fn test_identical_requests_hit_cache() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer.clone(),
        )))
        .await;

        for _ in 0..3 {
            let req = analyze_request(Some(TEST_KEY), "same text").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);
        }

        assert_eq!(analyzer.calls(), 1);
    }

    #[actix_web::test]
    async fn test_disabled_cache_calls_model_every_time() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::without_cache(),
            analyzer.clone(),
        )))
        .await;

        for _ in 0..2 {
            let req = analyze_request(Some(TEST_KEY), "same text").to_request();
            test::call_service(&app, req).await;
        }

        assert_eq!(analyzer.calls(), 2);
    }

    #[actix_web::test]
    async fn test_model_failure_does_not_leak_details() {
        let analyzer = StubAnalyzer::failing("connection refused at 10.0.0.7");
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        let req = analyze_request(Some(TEST_KEY), "hello")
            .insert_header(("x-request-id", "req-500"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body = crate::assert_error_code!(resp, 500, "MODEL_ERROR");
        assert_eq!(body.error.message, "Error processing sentiment analysis");
        assert!(!body.error.message.contains("10.0.0.7"));
        assert_eq!(body.error.request_id.as_deref(), Some("req-500"));
    }

    // ==================== Rate Limiting ====================

    #[actix_web::test]
    async fn test_per_key_limit_returns_429() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer.clone(),
        )))
        .await;

        for _ in 0..2 {
            let req = analyze_request(Some(LIMITED_KEY), "hello").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);
        }

        let req = analyze_request(Some(LIMITED_KEY), "hello").to_request();
        let resp = test::call_service(&app, req).await;

        let retry_after: u64 = resp
            .headers()
            .get("retry-after")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=60).contains(&retry_after));
        assert_eq!(resp.headers().get("x-ratelimit-remaining").unwrap(), "0");
        crate::assert_error_code!(resp, 429, "RATE_LIMIT_ERROR");
        assert_eq!(analyzer.calls(), 1);
    }

    #[actix_web::test]
    async fn test_keys_have_independent_quotas() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        for _ in 0..3 {
            let req = analyze_request(Some(LIMITED_KEY), "hello").to_request();
            test::call_service(&app, req).await;
        }

        let req = analyze_request(Some(TEST_KEY), "hello").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[actix_web::test]
    async fn test_rejected_requests_are_not_rate_counted() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        for _ in 0..5 {
            let req = analyze_request(Some(LIMITED_KEY), "").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 422);
        }

        let req = analyze_request(Some(LIMITED_KEY), "hello").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    // ==================== Health and Docs ====================

    #[actix_web::test]
    async fn test_health_reports_model() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(HEALTH).to_request()).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, HealthStatus::Healthy);
        assert!(body.model_loaded);
        assert_eq!(body.model_name.as_deref(), Some("stub-model"));
        assert_eq!(body.environment, "development");
    }

    #[actix_web::test]
    async fn test_health_unavailable_after_shutdown() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let state = state(&ConfigFactory::create(), analyzer);
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        state.shutdown().await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(HEALTH).to_request()).await;
        assert_eq!(resp.status().as_u16(), 503);
        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, HealthStatus::Unhealthy);
        assert!(!body.model_loaded);
    }

    #[actix_web::test]
    async fn test_health_is_rate_limited_per_client() {
        let mut config = ConfigFactory::create();
        config.gateway.rate_limit.health_requests_per_window = 2;
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(&config, analyzer))).await;

        for _ in 0..2 {
            let resp =
                test::call_service(&app, test::TestRequest::get().uri(HEALTH).to_request()).await;
            assert_eq!(resp.status().as_u16(), 200);
        }

        let resp = test::call_service(&app, test::TestRequest::get().uri(HEALTH).to_request()).await;
        assert!(resp.headers().contains_key("retry-after"));
        crate::assert_error_code!(resp, 429, "RATE_LIMIT_ERROR");
    }

    #[actix_web::test]
    async fn test_openapi_document_is_served() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        let req = test::TestRequest::get().uri("/api/v1/openapi.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let doc: Value = test::read_body_json(resp).await;
        assert!(doc["paths"]["/api/v1/sentiment/analyze"]["post"].is_object());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let analyzer = StubAnalyzer::returning(ScoreFactory::joyful());
        let app = test::init_service(HttpServer::create_app(state(
            &ConfigFactory::create(),
            analyzer,
        )))
        .await;

        let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }
}
