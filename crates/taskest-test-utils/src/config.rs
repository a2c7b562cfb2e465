//! Configuration builders and fixtures for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values, and
//! [`TestConfigFile`] to put one on disk for tests that drive the binary.

use std::path::{Path, PathBuf};

use taskest_config::AppConfig;
use tempfile::TempDir;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .profile("conservative")
///     .with_qa(true)
///     .buffer(1.2)
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn profile(mut self, profile: &str) -> Self {
        self.config.estimate.profile = profile.to_string();
        self
    }

    pub fn with_qa(mut self, enabled: bool) -> Self {
        self.config.estimate.with_qa = enabled;
        self
    }

    pub fn qa_include(mut self, enabled: bool) -> Self {
        self.config.estimate.qa_include = enabled;
        self
    }

    pub fn buffer(mut self, buffer: f64) -> Self {
        self.config.estimate.buffer = buffer;
        self
    }

    pub fn qa_buffer(mut self, qa_buffer: f64) -> Self {
        self.config.estimate.qa_buffer = Some(qa_buffer);
        self
    }

    pub fn buffer_per_task(mut self, enabled: bool) -> Self {
        self.config.estimate.buffer_per_task = enabled;
        self
    }

    pub fn format(mut self, format: &str) -> Self {
        self.config.output.format = format.to_string();
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A config file written into an owned temp directory.
///
/// The directory is deleted when this value is dropped.
pub struct TestConfigFile {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TestConfigFile {
    /// Write `toml_content` verbatim to a fresh `taskest.toml`.
    pub fn with_toml(toml_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("taskest.toml");
        std::fs::write(&path, toml_content).expect("failed to write test config");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Serialize `config` to TOML and write it to disk.
    pub fn from_config(config: &AppConfig) -> Self {
        let content = toml::to_string_pretty(config).expect("failed to serialize test config");
        Self::with_toml(&content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
