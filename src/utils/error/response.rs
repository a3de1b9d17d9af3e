//! HTTP response handling for errors

use super::types::SentimentError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl SentimentError {
    /// Client-visible message. Server-side failures never leak their cause.
    pub fn public_message(&self) -> String {
        match self {
            SentimentError::Validation(msg)
            | SentimentError::Auth(msg)
            | SentimentError::RateLimit(msg) => msg.clone(),
            SentimentError::Model(_) | SentimentError::Service(_) => {
                "Error processing sentiment analysis".to_string()
            }
            SentimentError::Cache(_) => "Cache operation failed".to_string(),
            SentimentError::Config(_) => "Service is misconfigured".to_string(),
            _ => "An unexpected error occurred".to_string(),
        }
    }

    /// Build the JSON error response, tagged with the request correlation id
    pub fn to_response(&self, request_id: Option<&str>) -> HttpResponse {
        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.public_message(),
                timestamp: chrono::Utc::now().timestamp(),
                request_id: request_id.map(str::to_string),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

impl ResponseError for SentimentError {
    fn status_code(&self) -> StatusCode {
        match self {
            SentimentError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SentimentError::Auth(_) => StatusCode::UNAUTHORIZED,
            SentimentError::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(None)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
