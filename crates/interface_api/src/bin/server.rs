//! Claims Assessment API Server Binary
//!
//! This binary starts the HTTP API server for the claim assessment pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-assessment-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_SEED_PATH=claims.json cargo run --bin claims-assessment-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_SEED_PATH` - JSON array of claims to load into the store
//! * `API_ASSESSMENT__VALIDATION_ENABLED`, `API_ASSESSMENT__SCORING_ENABLED`,
//!   `API_ASSESSMENT__ROUTING_ENABLED`, `API_ASSESSMENT__SUMMARIZATION_ENABLED` -
//!   engine toggles (default: true)
//! * `API_ASSESSMENT__CORPUS_POLICY` - `exclude_self` (default) or `include_all`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claims::{ClaimAssessmentService, HeuristicHintProvider, InMemoryClaimStore};
use interface_api::{config::ApiConfig, create_router, seed::read_seed_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        assessment = ?config.assessment,
        "Starting Claims Assessment API Server"
    );

    let store = create_store(&config)?;
    let service = ClaimAssessmentService::new(
        Arc::new(store),
        Arc::new(HeuristicHintProvider::new()),
        &config.assessment,
    );

    let app = create_router(Arc::new(service), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from the environment, falling back to defaults
fn load_config() -> ApiConfig {
    match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // Tracing is not installed yet
            eprintln!("Invalid API configuration ({err}), using defaults");
            ApiConfig::default()
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the in-memory claim store, seeding it when a file is configured
fn create_store(config: &ApiConfig) -> anyhow::Result<InMemoryClaimStore> {
    let Some(path) = &config.seed_path else {
        return Ok(InMemoryClaimStore::new());
    };

    let claims = read_seed_file(path)?;
    tracing::info!(path = %path.display(), count = claims.len(), "Seeded claim store");
    Ok(InMemoryClaimStore::with_claims(claims))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
