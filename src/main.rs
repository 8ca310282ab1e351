//! HabitFlow server
//!
//! Loads configuration, opens the store, and serves the REST API.
//!
//! Run with: cargo run -- --port 8090

use clap::Parser;
use habitflow::api::{serve, ApiConfig, AppState};
use habitflow::config::{Config, LoggingConfig};
use habitflow::storage::{HabitStore, StorageConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "habitflow", version, about = "Habit & sleep tracking backend")]
struct Args {
    /// Path to a TOML config file (default: standard locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API host
    #[arg(long)]
    host: Option<String>,

    /// Override the API port
    #[arg(long)]
    port: Option<u16>,

    /// Override the data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir.to_string_lossy().to_string();
    }

    init_tracing(&config.logging);

    tracing::info!("Starting HabitFlow v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.storage.data_dir);

    let store = Arc::new(HabitStore::open(StorageConfig::new(&config.storage.data_dir)).await?);

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        cors_origins: config.api.cors_origins.clone(),
    };

    let state = AppState::new(store, api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("HabitFlow stopped");
    Ok(())
}

/// Initialize the tracing subscriber per the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("habitflow={},tower_http=warn", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
