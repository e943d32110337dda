//! Configuration types for PatternSense.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sequence::EXPECTED_ARITY;
use crate::Error;

/// Absolute tolerance for floating-point difference and ratio comparisons.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Server configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Server settings
    pub server: ServerSettings,
    /// Analysis settings
    pub analysis: AnalysisSettings,
}

impl ServerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ServerConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.request_timeout_ms == 0 {
            return Err(Error::Config(
                "server.request_timeout_ms must be > 0".to_string(),
            ));
        }

        self.analysis.validate()
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    pub log_level: String,
    /// Upper bound for a single tool call in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// Analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of elements every request must carry
    pub arity: usize,
    /// Comparison tolerance for the arithmetic and geometric detectors
    pub tolerance: f64,
    /// Run detectors as parallel blocking tasks
    pub concurrent: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            arity: EXPECTED_ARITY,
            tolerance: DEFAULT_TOLERANCE,
            concurrent: false,
        }
    }
}

impl AnalysisSettings {
    /// Validate analysis values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.arity == 0 {
            return Err(Error::Config("analysis.arity must be > 0".to_string()));
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }

        Ok(())
    }
}
