//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::SentimentError;
use std::io::ErrorKind;

impl HttpServer {
    /// Format a readable error for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> SentimentError {
        match error.kind() {
            ErrorKind::AddrInUse => SentimentError::config(format!(
                "Port {} is already in use. Stop the other process or start with --port {} (SENTIMENT_PORT)",
                port,
                port.saturating_add(1)
            )),
            ErrorKind::PermissionDenied => SentimentError::config(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. --port 8000",
                port
            )),
            _ => SentimentError::config(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
