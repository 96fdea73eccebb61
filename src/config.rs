//! Configuration management for the `airmood` engine
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::AqiError;
use crate::forecast::{AxisPolicy, AxisRange};
use crate::mood::MoodSettings;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Forecast comparison chart settings
    #[serde(default)]
    pub chart: ChartConfig,
    /// Mood derivation settings
    #[serde(default)]
    pub mood: MoodConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Shared y-axis settings for the forecast comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Factor applied to the smallest AQI on the chart
    #[serde(default = "default_lower_padding")]
    pub lower_padding: f64,
    /// Factor applied to the largest AQI on the chart
    #[serde(default = "default_upper_padding")]
    pub upper_padding: f64,
    /// Axis minimum when there is no data
    #[serde(default = "default_axis_min")]
    pub default_min: u32,
    /// Axis maximum when there is no data
    #[serde(default = "default_axis_max")]
    pub default_max: u32,
}

/// Mood derivation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodConfig {
    /// AQI above which recommendations are given
    #[serde(default = "default_action_threshold")]
    pub action_threshold: u16,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_lower_padding() -> f64 {
    AxisPolicy::default().lower_padding
}

fn default_upper_padding() -> f64 {
    AxisPolicy::default().upper_padding
}

fn default_axis_min() -> u32 {
    AxisPolicy::default().default_range.y_min
}

fn default_axis_max() -> u32 {
    AxisPolicy::default().default_range.y_max
}

fn default_action_threshold() -> u16 {
    MoodSettings::default().action_threshold
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            lower_padding: default_lower_padding(),
            upper_padding: default_upper_padding(),
            default_min: default_axis_min(),
            default_max: default_axis_max(),
        }
    }
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            action_threshold: default_action_threshold(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("airmood.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. AIRMOOD_MOOD__ACTION_THRESHOLD=120
        builder = builder.add_source(
            Environment::with_prefix("AIRMOOD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: EngineConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("airmood").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_chart()?;
        self.validate_mood()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_chart(&self) -> Result<()> {
        let chart = &self.chart;
        if !(chart.lower_padding > 0.0 && chart.lower_padding <= 1.0) {
            return Err(AqiError::config(format!(
                "Chart lower padding must be in (0, 1], got {}",
                chart.lower_padding
            ))
            .into());
        }

        if !(chart.upper_padding >= 1.0 && chart.upper_padding.is_finite()) {
            return Err(AqiError::config(format!(
                "Chart upper padding must be at least 1, got {}",
                chart.upper_padding
            ))
            .into());
        }

        if chart.default_min >= chart.default_max {
            return Err(AqiError::config(
                "Chart default minimum must be below the default maximum",
            )
            .into());
        }

        Ok(())
    }

    fn validate_mood(&self) -> Result<()> {
        if self.mood.action_threshold > 500 {
            return Err(AqiError::config("Mood action threshold cannot exceed AQI 500").into());
        }
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AqiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AqiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Axis padding policy for forecast comparisons
    #[must_use]
    pub fn axis_policy(&self) -> AxisPolicy {
        AxisPolicy {
            lower_padding: self.chart.lower_padding,
            upper_padding: self.chart.upper_padding,
            default_range: AxisRange {
                y_min: self.chart.default_min,
                y_max: self.chart.default_max,
            },
        }
    }

    #[must_use]
    pub fn mood_settings(&self) -> MoodSettings {
        MoodSettings {
            action_threshold: self.mood.action_threshold,
        }
    }
}
