#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};
use crate::routes::StartupError;

/// Fatal host errors.
#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is the normal case outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "genocrowd host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;

    match &config.backend_url {
        Some(url) => tracing::info!(backend = %url, "forwarding /api to backend"),
        None => tracing::warn!("GENOCROWD_BACKEND_URL not set; /api requests will answer 503"),
    }

    let app = routes::leptos_app(&config)?;
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "genocrowd listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
