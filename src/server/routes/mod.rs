//! HTTP route modules

pub mod docs;
pub mod health;
pub mod sentiment;

use crate::core::rate_limiter::RateLimitDecision;
use crate::utils::error::SentimentError;
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::{HttpResponse, web};

/// Mount every route under `prefix`
pub fn configure_routes(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(
        web::scope(prefix)
            .route("/health", web::get().to(health::health_check))
            .route("/sentiment/analyze", web::post().to(sentiment::analyze))
            .route("/openapi.json", web::get().to(docs::openapi)),
    );
}

/// Attach `X-RateLimit-*` headers describing a decision
pub(crate) fn apply_rate_limit_headers(response: &mut HttpResponse, decision: &RateLimitDecision) {
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static("x-ratelimit-limit"),
        HeaderValue::from(decision.limit),
    );
    headers.insert(
        HeaderName::from_static("x-ratelimit-remaining"),
        HeaderValue::from(decision.remaining),
    );
    headers.insert(
        HeaderName::from_static("x-ratelimit-reset"),
        HeaderValue::from(decision.retry_after.as_secs()),
    );
}

/// 429 response carrying `Retry-After`
pub(crate) fn rate_limited(decision: &RateLimitDecision, request_id: Option<&str>) -> HttpResponse {
    let error = SentimentError::rate_limit("Rate limit exceeded. Please try again later.");
    let mut response = error.to_response(request_id);
    response.headers_mut().insert(
        header::RETRY_AFTER,
        HeaderValue::from(decision.retry_after_secs()),
    );
    apply_rate_limit_headers(&mut response, decision);
    response
}
