//! Server binary for the consultant locations service.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `consultant-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Create the location store with its seed records
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use consultant_api::{AppState, ServerConfig};
use consultant_core::config::DEFAULT_CONFIG_FILE;
use consultant_core::{LocationStore, LoggingConfig, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the server
/// cannot bind.
#[tokio::main]
async fn main() -> Result<(), ServerBinError> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("consultant-server starting");
    if from_file {
        info!(path = DEFAULT_CONFIG_FILE, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Create the store.
    let store = Arc::new(LocationStore::new());
    info!(records = store.len(), "Location store seeded");

    // 4. Serve.
    let state = Arc::new(AppState::with_base_path(
        store,
        config.server.normalized_base_path(),
    ));
    let server_config = ServerConfig::from(&config.server);
    consultant_api::start_server(&server_config, state).await?;

    info!("consultant-server exited cleanly");
    Ok(())
}

/// Load configuration, reporting whether the YAML file was present.
fn load_config() -> Result<(ServiceConfig, bool), ServerBinError> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        Ok((ServiceConfig::from_file(config_path)?, true))
    } else {
        Ok((ServiceConfig::from_env_only()?, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
