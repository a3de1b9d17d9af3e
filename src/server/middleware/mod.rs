//! HTTP middleware and request helpers
//!
//! - Request ID tracking and process time reporting
//! - API key authentication
//! - Header and peer address extraction

mod auth;
mod helpers;
mod request_id;

pub use auth::ApiKeyAuth;
pub use helpers::{API_KEY_HEADER, client_ip, extract_api_key, request_id};
pub use request_id::{
    PROCESS_TIME_HEADER, REQUEST_ID_HEADER, RequestId, RequestIdMiddleware,
    RequestIdMiddlewareService,
};
