//! Health check endpoint

use crate::core::rate_limiter::ip_bucket;
use crate::core::types::{HealthResponse, HealthStatus};
use crate::server::middleware::{client_ip, request_id};
use crate::server::routes::rate_limited;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, warn};

/// Report service health.
///
/// Limited per client IP. Returns 503 once shutdown has begun.
pub async fn health_check(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let ip = client_ip(&req);
    let decision = state.health_limiter.check(&ip_bucket(&ip));
    if !decision.allowed {
        warn!(client_ip = %ip, "Health check rate limited");
        return rate_limited(&decision, request_id(&req).as_deref());
    }

    debug!("Health check requested");

    let app = state.config.app();
    let status = state.service.health();
    let body = HealthResponse {
        status,
        version: app.version.clone(),
        model_loaded: state.service.is_model_loaded(),
        model_name: Some(state.service.model_name().to_string()),
        environment: app.environment.to_string(),
    };

    match status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
        HealthStatus::Healthy | HealthStatus::Degraded => HttpResponse::Ok().json(body),
    }
}
