use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_AREA_URL: &str = "https://www.jma.go.jp/bosai/common/const/area.json";
pub const DEFAULT_FORECAST_BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast/";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// JMA endpoints and HTTP client settings
    #[serde(default)]
    pub jma: JmaConfig,

    /// Window preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JmaConfig {
    /// Area catalog document (`area.json`)
    #[serde(default = "default_area_url")]
    pub area_url: String,

    /// Prefix that `{office_code}.json` is appended to
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Skip TLS certificate validation. A warning is logged at startup
    /// while this is on.
    #[serde(default = "default_allow_invalid_certs")]
    pub allow_invalid_certs: bool,

    /// Per-request timeout. `None` keeps the HTTP client default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_area_url() -> String {
    DEFAULT_AREA_URL.to_string()
}

fn default_forecast_base_url() -> String {
    DEFAULT_FORECAST_BASE_URL.to_string()
}

fn default_allow_invalid_certs() -> bool {
    true
}

impl Default for JmaConfig {
    fn default() -> Self {
        Self {
            area_url: default_area_url(),
            forecast_base_url: default_forecast_base_url(),
            allow_invalid_certs: default_allow_invalid_certs(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Font file with Japanese glyphs. Falls back to well-known system fonts.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_window_width() -> u32 {
    1100
}

fn default_window_height() -> u32 {
    720
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            font_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the user config directory.
    ///
    /// A missing file yields the defaults; nothing is written to disk.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(e.to_string()))
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()))
                .context("Configuration validation failed");
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_url(&self.jma.area_url, "jma.area_url", &mut result);
        Self::validate_url(
            &self.jma.forecast_base_url,
            "jma.forecast_base_url",
            &mut result,
        );
        if !self.jma.forecast_base_url.ends_with('/') {
            result.add_error(
                "jma.forecast_base_url",
                "Base URL must end with '/' so the office code can be appended",
            );
        }

        if self.jma.allow_invalid_certs {
            result.add_warning(
                "jma.allow_invalid_certs",
                "TLS certificate validation is disabled",
            );
        }

        match self.jma.request_timeout_secs {
            Some(0) => result.add_error(
                "jma.request_timeout_secs",
                "Timeout must be greater than 0 (omit it to use the client default)",
            ),
            Some(secs) if secs < 3 => result.add_warning(
                "jma.request_timeout_secs",
                format!("Timeout of {secs}s is likely too short for the JMA endpoints"),
            ),
            _ => {}
        }

        if self.ui.window_width == 0 {
            result.add_error("ui.window_width", "Window width must be greater than 0");
        } else if self.ui.window_width > 10000 {
            result.add_warning("ui.window_width", "Window width is unusually large (>10000)");
        }

        if self.ui.window_height == 0 {
            result.add_error("ui.window_height", "Window height must be greater than 0");
        } else if self.ui.window_height > 10000 {
            result.add_warning("ui.window_height", "Window height is unusually large (>10000)");
        }

        if let Some(font) = &self.ui.font_path {
            if !font.is_file() {
                result.add_warning(
                    "ui.font_path",
                    format!("Font file does not exist: {}", font.display()),
                );
            }
        }

        result
    }

    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tenki").join("config.toml"))
    }
}
