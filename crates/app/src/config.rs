//! Panel configuration: TOML with defaults for every field.
//!
//! The dashboard embeds `panel.toml` at build time; a missing or partial
//! file falls back to the defaults below.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Backend location.
    pub api: ApiConfig,
    /// Status polling.
    pub polling: PollingConfig,
    /// Settings form slider bounds.
    pub settings: SliderConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Backend location.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for `/action`, `/settings` and `/status`; empty means same origin.
    pub base_url: String,
}

/// Status polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Period between two `/status` requests, in milliseconds.
    pub interval_ms: u64,
}

/// Bounds of the two settings sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub confidence_min: u32,
    pub confidence_max: u32,
    pub timeout_min: u32,
    pub timeout_max: u32,
    pub timeout_step: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
}

impl PanelConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling interval must be non-zero".to_string(),
            ));
        }
        let sliders = &self.settings;
        if sliders.confidence_min == 0 || sliders.confidence_min > sliders.confidence_max {
            return Err(ConfigError::Validation(
                "confidence bounds must satisfy 0 < min <= max".to_string(),
            ));
        }
        if sliders.timeout_min == 0 || sliders.timeout_min > sliders.timeout_max {
            return Err(ConfigError::Validation(
                "timeout bounds must satisfy 0 < min <= max".to_string(),
            ));
        }
        if sliders.timeout_step == 0 {
            return Err(ConfigError::Validation(
                "timeout step must be non-zero".to_string(),
            ));
        }
        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log level `{}`",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Period of the status polling timer.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.polling.interval_ms)
    }

    /// Maximum log level, `INFO` when the configured one is unknown.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.logging.level).unwrap_or(tracing::Level::INFO)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            confidence_min: 1,
            confidence_max: 100,
            timeout_min: 10,
            timeout_max: 600,
            timeout_step: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse panel config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid panel configuration: {0}")]
    Validation(String),
}
