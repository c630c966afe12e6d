use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::model::DEFAULT_TEMPERATURE;
use crate::orchestrator::MIN_DURATION;

/// Settings for talking to the generation endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LabConfig {
    /// URL the generation request is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Minimum time a generation takes, in milliseconds; values below
    /// 3500 are raised to 3500
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: u64,
    /// Request timeout in seconds (0 waits forever)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Creativity used when none is given
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            min_duration_ms: default_min_duration_ms(),
            timeout: default_timeout(),
            temperature: default_temperature(),
        }
    }
}

// Default value functions
fn default_endpoint() -> String {
    "http://localhost:8000/generate".to_string()
}

fn default_min_duration_ms() -> u64 {
    MIN_DURATION.as_millis() as u64
}

fn default_timeout() -> u64 {
    60
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl LabConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MATCHAGEN__ prefix
    /// 2. matchagen.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MATCHAGEN__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configured minimum duration, never shorter than [`MIN_DURATION`]
    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms).max(MIN_DURATION)
    }

    /// `None` when the timeout is disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

/// Load configuration from `matchagen.toml` and `MATCHAGEN__*` variables
pub fn load_config() -> Result<LabConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("matchagen").required(false))
        .add_source(
            Environment::with_prefix("MATCHAGEN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
