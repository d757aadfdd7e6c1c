//! Bright Health auth server.
//!
//! Main entry point: loads configuration, sets up logging, and runs the API.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use brighthealth_core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("BRIGHTHEALTH_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env).context("Failed to load configuration")?;

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if config.auth.secret_key == brighthealth_core::config::auth::DEFAULT_SECRET_KEY {
        tracing::warn!("Using the default token signing key; set BRIGHTHEALTH__AUTH__SECRET_KEY");
    }

    brighthealth_api::run_server(config)
        .await
        .context("Server error")?;
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
