//! Attendance compliance engine HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use clap::Parser;

/// Attendance compliance analysis service.
#[derive(Parser)]
#[command(name = "attendance-engine", version)]
struct Cli {
    /// Policy configuration directory
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    tracing::info!(
        organization = %config.organization().code,
        version = %config.organization().version,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    tracing::info!(address = %cli.bind, "Listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
