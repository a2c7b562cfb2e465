#![deny(unsafe_code)]

//! Configuration loading and validation for taskest.
//!
//! Loads an optional TOML file holding default estimation settings and
//! validates it. The [`AppConfig`] type is the central configuration
//! structure; [`AppConfig::estimate_options`] turns it into engine options.
//!
//! ## TOML Example
//!
//! ```toml
//! [estimate]
//! profile = "conservative"
//! with_qa = true
//! qa_include = true
//! buffer = 1.2
//! qa_buffer = 1.5
//! buffer_per_task = false
//!
//! [output]
//! format = "json"
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use taskest_core::{BufferConfig, EstimateOptions, Profile};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Output formats understood by the CLI.
pub const OUTPUT_FORMATS: [&str; 2] = ["md", "json"];

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Estimation defaults.
    #[serde(default)]
    pub estimate: EstimateConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Estimation defaults; every field can be overridden on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Profile name: "general", "conservative", or "fast". Unknown names
    /// fall back to a neutral multiplier of 1.0.
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Run QA detection.
    #[serde(default)]
    pub with_qa: bool,

    /// Add QA hours to the grand total.
    #[serde(default)]
    pub qa_include: bool,

    /// Core safety factor (e.g. 1.2 = +20%).
    #[serde(default = "default_buffer")]
    pub buffer: f64,

    /// QA safety factor. Defaults to `buffer` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa_buffer: Option<f64>,

    /// Apply the core buffer to per-task rows as well.
    #[serde(default)]
    pub buffer_per_task: bool,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            with_qa: false,
            qa_include: false,
            buffer: default_buffer(),
            qa_buffer: None,
            buffer_per_task: false,
        }
    }
}

fn default_profile() -> String {
    "general".to_string()
}

fn default_buffer() -> f64 {
    1.0
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "md" (table report) or "json" (structured dump).
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "md".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "warn", "info", "debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Check that a buffer factor is usable.
pub fn validate_buffer(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_buffer("estimate.buffer", self.estimate.buffer)?;
        if let Some(qa_buffer) = self.estimate.qa_buffer {
            validate_buffer("estimate.qa_buffer", qa_buffer)?;
        }

        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "output.format must be one of {:?}, got {:?}",
                OUTPUT_FORMATS, self.output.format
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build engine options from the `[estimate]` section.
    pub fn estimate_options(&self) -> EstimateOptions {
        let estimate = &self.estimate;
        EstimateOptions::new()
            .profile(Profile::from_name_or_default(&estimate.profile))
            .with_qa(estimate.with_qa)
            .qa_include(estimate.qa_include)
            .buffers(BufferConfig::new(
                estimate.buffer,
                estimate.qa_buffer,
                estimate.buffer_per_task,
            ))
    }
}
