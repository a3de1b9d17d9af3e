//! sentiment-gateway - emotion classification over HTTP

use clap::Parser;
use sentiment_gateway::utils::logging::init_logging;
use sentiment_gateway::{Config, build_info, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config/sentiment.yaml";

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "sentiment-gateway", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "SENTIMENT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config_path = args.config.or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_PATH);
        default.exists().then_some(default)
    });

    let mut config = match Config::load(config_path.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.apply_server_overrides(args.host, args.port) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let production = config.app().environment.is_production();
    if let Err(e) = init_logging(config.logging(), production) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let build = build_info();
    info!(
        version = build.version,
        git_hash = build.git_hash,
        environment = %config.app().environment,
        "Configuration loaded"
    );

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
