//! OpenAPI document

use crate::core::types::EmotionLabel;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::{Map, Value, json};

/// `GET /openapi.json`
pub async fn openapi(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(openapi_document(&state))
}

pub(crate) fn openapi_document(state: &AppState) -> Value {
    let app = state.config.app();
    let prefix = app.api_prefix.trim_end_matches('/');

    let mut paths = Map::new();
    paths.insert(format!("{}/health", prefix), health_path());
    paths.insert(format!("{}/sentiment/analyze", prefix), analyze_path());

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": app.project_name,
            "version": app.version,
            "description": "Emotion classification with result caching, API key authentication and rate limiting",
        },
        "paths": paths,
        "components": {
            "securitySchemes": {
                "ApiKeyAuth": { "type": "apiKey", "in": "header", "name": "X-API-Key" }
            },
            "schemas": schemas(state.service.validator().max_chars()),
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "application/json": { "schema": { "$ref": format!("#/components/schemas/{}", name) } } })
}

fn response(description: &str, schema: &str) -> Value {
    json!({ "description": description, "content": schema_ref(schema) })
}

fn health_path() -> Value {
    json!({
        "get": {
            "summary": "Service health",
            "responses": {
                "200": response("Healthy or degraded", "HealthResponse"),
                "429": response("Too many health checks from this address", "ErrorResponse"),
                "503": response("Shutting down", "HealthResponse"),
            }
        }
    })
}

fn analyze_path() -> Value {
    let mut too_many = response("Rate limit exceeded", "ErrorResponse");
    too_many["headers"] = json!({ "Retry-After": { "schema": { "type": "integer" } } });

    json!({
        "post": {
            "summary": "Classify the emotions expressed in a text",
            "security": [{ "ApiKeyAuth": [] }],
            "requestBody": { "required": true, "content": schema_ref("SentimentRequest") },
            "responses": {
                "200": response("Scores sorted by confidence", "SentimentResponse"),
                "401": response("Missing or invalid API key", "ErrorResponse"),
                "422": response("Invalid text", "ErrorResponse"),
                "429": too_many,
                "500": response("Analysis failed", "ErrorResponse"),
            }
        }
    })
}

fn schemas(max_length: usize) -> Value {
    let labels: Vec<&str> = EmotionLabel::ALL.iter().map(EmotionLabel::as_str).collect();

    let request = json!({
        "type": "object",
        "required": ["text"],
        "properties": {
            "text": { "type": "string", "minLength": 1, "maxLength": max_length }
        }
    });

    let score = json!({
        "type": "object",
        "required": ["label", "score"],
        "properties": {
            "label": { "type": "string", "enum": labels },
            "score": { "type": "number", "minimum": 0.0, "maximum": 1.0 }
        }
    });

    let sentiment = json!({
        "type": "object",
        "required": ["text", "scores", "status", "message"],
        "properties": {
            "text": { "type": "string" },
            "scores": { "type": "array", "items": { "$ref": "#/components/schemas/EmotionScore" } },
            "status": { "type": "string", "enum": ["success", "error", "warning"] },
            "message": { "type": "string" },
            "model_name": { "type": "string" }
        }
    });

    let health = json!({
        "type": "object",
        "required": ["status", "version", "model_loaded", "environment"],
        "properties": {
            "status": { "type": "string", "enum": ["healthy", "degraded", "unhealthy"] },
            "version": { "type": "string" },
            "model_loaded": { "type": "boolean" },
            "model_name": { "type": "string" },
            "environment": { "type": "string" }
        }
    });

    let error = json!({
        "type": "object",
        "required": ["error"],
        "properties": {
            "error": {
                "type": "object",
                "properties": {
                    "code": { "type": "string" },
                    "message": { "type": "string" },
                    "timestamp": { "type": "integer" },
                    "request_id": { "type": "string" }
                }
            }
        }
    });

    json!({
        "SentimentRequest": request,
        "EmotionScore": score,
        "SentimentResponse": sentiment,
        "HealthResponse": health,
        "ErrorResponse": error,
    })
}
