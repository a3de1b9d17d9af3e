//! Server builder and run_server function

use crate::config::Config;
use crate::core::analyzer::Analyzer;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, SentimentError};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    analyzer: Option<Arc<dyn Analyzer>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom analyzer instead of the HTTP inference client
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| SentimentError::Config("Configuration is required".to_string()))?;

        match self.analyzer {
            Some(analyzer) => Ok(HttpServer::with_analyzer(&config, analyzer)),
            None => HttpServer::new(&config),
        }
    }
}

/// Build and run the server until it is stopped
pub async fn run_server(config: Config) -> Result<()> {
    info!("🚀 Starting {}", config.app().project_name);

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    let prefix = &config.app().api_prefix;

    info!(
        "🌐 Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("🧠 Model: {}", config.model().model_name);
    info!("📋 API Endpoints:");
    info!("   GET  {}/health - Health check", prefix);
    info!("   POST {}/sentiment/analyze - Sentiment analysis", prefix);
    info!("   GET  {}/openapi.json - OpenAPI document", prefix);

    server.start().await
}
