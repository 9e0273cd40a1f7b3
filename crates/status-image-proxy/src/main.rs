//! Status Image Proxy - read-through cache for status code images
//!
//! Serves `/<code>` images from a local cache directory, fetching from the
//! origin on a miss. PUT stores a fixture image and DELETE removes an entry.

mod config;
mod error;
mod server;
mod types;

use crate::config::Cli;
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use clap::Parser;
use status_image_cache::{ImageCache, InitOutcome};
use status_origin_client::OriginClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse before logging so --help and usage errors print cleanly
    let cli = Cli::parse();

    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("status_image_proxy=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Status Image Proxy...");

    let config = cli.into_config()?;
    info!("Origin: {}", config.origin_url);
    info!("Origin timeout: {} seconds", config.origin_timeout.as_secs());
    info!("Fixture: {:?}", config.fixture_path);

    let cache = ImageCache::new(&config.cache_dir);
    match cache.init().await? {
        InitOutcome::Created => info!("Created cache directory: {:?}", config.cache_dir),
        InitOutcome::Existing => info!("Cache directory exists: {:?}", config.cache_dir),
    }

    let origin = OriginClient::new(&config.origin_url, config.origin_timeout)?;

    let state: SharedState = Arc::new(ServerState::new(cache, origin, config.fixture_path));

    start_server(state, &config.host, config.port).await?;

    Ok(())
}
