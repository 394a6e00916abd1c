use anyhow::Result;
use std::sync::Arc;

use crate::{Config, ValidationResult};

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance from the user config file.
    pub fn new() -> Result<Self> {
        let (config, validation) = Config::load_validated()?;
        Ok(Self::with_config(config, validation))
    }

    /// Create an application instance from an already loaded config.
    pub fn with_config(config: Config, validation: ValidationResult) -> Self {
        Self {
            config: Arc::new(config),
            validation,
        }
    }

    /// Log the effective settings before the window opens.
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            area_url = %self.config.jma.area_url,
            forecast_base_url = %self.config.jma.forecast_base_url,
            "Initializing application"
        );

        if self.config.jma.allow_invalid_certs {
            tracing::warn!("TLS certificate validation is disabled for JMA requests");
        }

        if !self.validation.warnings.is_empty() {
            tracing::debug!(
                "Configuration loaded with {} warning(s)",
                self.validation.warnings.len()
            );
        }

        tracing::info!("Application initialized successfully");
        Ok(())
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the config for services
    pub fn shared_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_config_keeps_validation() {
        let config = Config::default();
        let validation = config.validate();
        let warnings = validation.warnings.len();

        let mut app = App::with_config(config, validation);
        assert!(app.initialize().is_ok());
        assert_eq!(app.validation().warnings.len(), warnings);
        assert_eq!(app.config().ui.window_width, 1100);
        assert!(app.shutdown().is_ok());
    }
}
