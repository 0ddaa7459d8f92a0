//! EcoNeighbor API server
//!
//! Run with: cargo run --bin econeighbor-api
//!
//! # Configuration
//!
//! Flags override the config file, which is overridden by environment
//! variables:
//! - `ECONEIGHBOR_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `ECONEIGHBOR_API_PORT`: Port to listen on (default: 8090)
//! - `ECONEIGHBOR_STARTING_POINTS`: Seed eco points (default: 175)
//! - `ECONEIGHBOR_DAY_STREAK`: Seed day streak (default: 12)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use econeighbor::api::{serve, ApiConfig, AppState};
use econeighbor::config::{generate_default_config, Config};
use econeighbor::dashboard::{DashboardEngine, SessionState};

/// Neighborhood sustainability dashboard server
#[derive(Parser, Debug)]
#[command(name = "econeighbor-api", version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file to stdout and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "econeighbor=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EcoNeighbor API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration: file (or defaults), then env, then flags
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    tracing::info!(
        "Session seed: {} points, {} day streak",
        config.session.starting_points,
        config.session.day_streak
    );

    // Build the dashboard engine over the seeded session
    let session = SessionState::seeded_with_ledger(
        config.session.starting_points,
        config.session.day_streak,
    );
    let engine = Arc::new(DashboardEngine::with_session(session));

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(engine, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("EcoNeighbor API server stopped");
    Ok(())
}
