//! Utility modules
//!
//! - **error**: error type, HTTP error mapping
//! - **logging**: tracing subscriber setup
//! - **task**: periodic background tasks

pub mod error;
pub mod logging;
pub mod task;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Truncate a string to at most `max_chars` characters, appending an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}
