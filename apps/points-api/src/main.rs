//! # Receipt Points API
//!
//! HTTP server that scores receipts, or a one-shot scorer for a receipt file.
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  points-api                      serve HTTP on POINTS_HOST:POINTS_PORT  │
//! │  points-api receipt.json         write { id, points } to response.json  │
//! │  points-api receipt.json -o x    write { id, points } to x              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use points_api::debug_file::process_file;
use points_api::{app, AppState, ServiceConfig};
use points_registry::ReceiptRegistry;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "points-api")]
#[command(about = "Receipt points scoring service", long_about = None)]
#[command(version)]
struct Cli {
    /// Score this receipt JSON file instead of starting the server
    receipt: Option<PathBuf>,

    /// Where to write the debug response (defaults to POINTS_RESPONSE_PATH)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ServiceConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    let registry = ReceiptRegistry::new();

    if let Some(input) = cli.receipt {
        let output = cli.output.unwrap_or_else(|| config.response_path.clone());
        let response = process_file(&registry, &input, &output)
            .with_context(|| format!("Failed to score {}", input.display()))?;
        println!("{} {}", response.id, response.points);
        return Ok(());
    }

    let addr = config.bind_addr();
    info!(%addr, log_level = %config.log_level, "Starting receipt points server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app(AppState::new(registry)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_tracing(config: &ServiceConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
