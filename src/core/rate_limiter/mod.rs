//! Rate Limiting Implementation
//!
//! Fixed window request counting per key (hashed API key or client IP)

mod limiter;
mod types;
mod utils;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitDecision;
pub use utils::{api_key_bucket, ip_bucket};
