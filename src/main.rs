//! `pulse-connect` host: serves the server-rendered front end and its bundle.
#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

async fn run() -> Result<(), HostError> {
    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(host.addr)
        .await
        .map_err(|source| HostError::Bind { addr: host.addr, source })?;

    tracing::info!(addr = %host.addr, api_base = pulse_client::config::api_base(), "pulse-connect listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pulse-connect failed to start");
        std::process::exit(1);
    }
}
