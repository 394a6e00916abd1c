pub mod app;
pub mod config;
pub mod error;
pub mod request_state;

pub use app::App;
pub use config::{Config, ConfigValidationError, JmaConfig, UiConfig, ValidationResult};
pub use error::{AppError, ConfigError, ForecastError, NetworkError, ReqwestErrorExt};
pub use request_state::{LoadState, RequestToken, RequestTracker};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::info!("Tenki core initialized");
    Ok(())
}
