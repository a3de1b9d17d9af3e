//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::analyzer::{Analyzer, InferenceAnalyzer};
use crate::core::cache::{ScoreCache, SentimentCache};
use crate::core::rate_limiter::RateLimiter;
use crate::core::service::SentimentService;
use crate::core::validation::TextValidator;
use crate::server::middleware::{RequestIdMiddleware, request_id};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, SentimentError};
use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server using the HTTP inference analyzer
    pub fn new(config: &Config) -> Result<Self> {
        let analyzer: Arc<dyn Analyzer> = Arc::new(InferenceAnalyzer::new(config.model())?);
        Ok(Self::with_analyzer(config, analyzer))
    }

    /// Create a server around an existing analyzer
    pub fn with_analyzer(config: &Config, analyzer: Arc<dyn Analyzer>) -> Self {
        info!("Creating HTTP server");
        Self {
            config: config.server().clone(),
            state: build_state(config, analyzer),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = build_cors(&state.config.gateway.server.cors);
        let prefix = state.config.app().api_prefix.clone();

        let json_config = web::JsonConfig::default()
            .limit(MAX_BODY_BYTES)
            .error_handler(|err, req| {
                let error = SentimentError::validation(format!("Invalid request body: {}", err));
                let response = error.to_response(request_id(req).as_deref());
                InternalError::from_response(err, response).into()
            });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "sentiment-gateway")))
            .configure(|cfg| routes::configure_routes(cfg, &prefix))
    }

    /// Start the HTTP server; background tasks stop once it returns
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        let state = web::Data::new(self.state);
        state.start();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let app_state = state.clone();
        let server = match ActixHttpServer::new(move || Self::create_app(app_state.clone()))
            .workers(workers)
            .bind(&bind_addr)
        {
            Ok(server) => server.run(),
            Err(e) => {
                state.shutdown().await;
                return Err(Self::format_bind_error(e, &bind_addr, port));
            }
        };

        info!("HTTP server listening on {}", bind_addr);
        let result = server.await;

        state.shutdown().await;
        info!("HTTP server stopped");

        result.map_err(|e| SentimentError::internal(format!("Server error: {}", e)))
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Wire the service, cache and limiters from configuration
pub fn build_state(config: &Config, analyzer: Arc<dyn Analyzer>) -> AppState {
    let cache = config
        .cache()
        .enabled
        .then(|| Arc::new(SentimentCache::from_config(config.cache())) as Arc<dyn ScoreCache>);
    if cache.is_none() {
        warn!("Result cache disabled");
    }

    let service = SentimentService::new(analyzer, cache)
        .with_validator(TextValidator::new(config.model().max_text_length));

    AppState::new(
        config.clone(),
        service,
        RateLimiter::from_config(config.rate_limit()),
        RateLimiter::health_from_config(config.rate_limit()),
    )
}

fn build_cors(cors_config: &crate::config::CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
        cors_config.validate().unwrap_or_else(|e| {
            warn!(error = %e, "CORS Configuration Warning");
        });
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors
        .expose_headers(vec![
            actix_web::http::header::HeaderName::from_static("x-request-id"),
            actix_web::http::header::HeaderName::from_static("x-process-time"),
        ])
        .max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
