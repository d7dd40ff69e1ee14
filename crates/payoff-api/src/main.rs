//! Payoff API Server binary.

use std::path::PathBuf;

use clap::Parser;
use payoff_api::{server::run_server, AppState, ServerConfig};
use payoff_core::PayoffAnalyzer;
use tracing_subscriber::EnvFilter;

/// Options Payoff Analysis REST API Server
#[derive(Parser, Debug)]
#[command(name = "payoff-api-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides config)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins when set
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("Payoff API Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServerConfig::default()
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let analyzer = PayoffAnalyzer::new(config.scan)?;
    tracing::info!(
        "Price scan {}..={} step {} ({} points)",
        config.scan.start,
        config.scan.end,
        config.scan.step,
        config.scan.len()
    );

    run_server(AppState::new(analyzer), &config.host, config.port).await
}
