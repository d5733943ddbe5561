//! Decoupled front-end server binary.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use decoupled_frontend::config::{load_config, FrontendConfig};
use decoupled_frontend::observability::metrics;
use decoupled_frontend::HttpServer;

#[derive(Parser)]
#[command(name = "decoupled-frontend")]
#[command(about = "Server-side renderer for a headless CMS content API", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decoupled_frontend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("decoupled-frontend v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FrontendConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        api_prefix = %config.backend.api_prefix,
        mock_enabled = config.mock.enabled,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
