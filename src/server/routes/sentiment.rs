//! Sentiment analysis endpoint

use crate::core::rate_limiter::api_key_bucket;
use crate::core::types::SentimentRequest;
use crate::server::middleware::{extract_api_key, request_id};
use crate::server::routes::{apply_rate_limit_headers, rate_limited};
use crate::server::state::AppState;
use crate::utils::error::SentimentError;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{error, info, warn};

/// `POST /sentiment/analyze`
///
/// Checks run in order: text validation, API key, rate limit, then the
/// service (cache or model).
pub async fn analyze(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<SentimentRequest>,
) -> HttpResponse {
    let request_id = request_id(&req);
    let rid = request_id.as_deref();

    let text = match state.service.validator().validate(&body.text) {
        Ok(text) => text,
        Err(e) => return reject(e, rid),
    };

    let api_key = match state.api_keys.authenticate(extract_api_key(req.headers())) {
        Ok(key) => key,
        Err(e) => return reject(e, rid),
    };

    let limiter = &state.api_limiter;
    let limit = state.api_keys.limit_for(api_key, limiter.limit());
    let decision = limiter.check_and_increment(&api_key_bucket(api_key), limit, limiter.window());
    if !decision.allowed {
        warn!(request_id = rid, count = decision.count, limit, "Rate limit exceeded");
        return rate_limited(&decision, rid);
    }

    match state.service.analyze(text).await {
        Ok(result) => {
            info!(
                request_id = rid,
                top = result.top().map(|s| s.label.as_str()),
                "Sentiment analysis completed"
            );
            let mut response = HttpResponse::Ok().json(result);
            apply_rate_limit_headers(&mut response, &decision);
            response
        }
        Err(e) => reject(e, rid),
    }
}

fn reject(error: SentimentError, request_id: Option<&str>) -> HttpResponse {
    if error.is_client_error() {
        warn!(request_id, code = error.code(), error = %error, "Request rejected");
    } else {
        error!(request_id, code = error.code(), error = %error, "Request failed");
    }
    error.to_response(request_id)
}
