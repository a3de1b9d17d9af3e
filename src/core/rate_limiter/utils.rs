//! Limiter key derivation

use sha2::{Digest, Sha256};

/// Bucket key for an authenticated API key; the raw key is never stored
pub fn api_key_bucket(api_key: &str) -> String {
    let digest = Sha256::digest(api_key.as_bytes());
    format!("key:{}", &hex::encode(digest)[..16])
}

/// Bucket key for an anonymous caller
pub fn ip_bucket(addr: &str) -> String {
    format!("ip:{}", addr)
}
