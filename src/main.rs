// gemvision - Image analysis over HTTP, backed by Gemini
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use clap::Parser;
use gemvision::cli::Args;
use gemvision::config::AppConfig;
use gemvision::gemini::GeminiClient;
use gemvision::server::create_router;
use gemvision::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments (PORT and GEMINI_API_KEY are read here)
    let args = Args::parse();

    // Phase 1: Load configuration; a missing API key stops startup here
    let config = AppConfig::load(&args)?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gemvision v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the Gemini client once for the whole process
    let gemini_client = GeminiClient::new(&config.gemini)?;
    info!("Using Gemini model {}", gemini_client.model());

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, Arc::new(gemini_client))?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
