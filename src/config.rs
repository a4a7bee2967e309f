//! Configuration file support for contour runs

use crate::contour::ContourOptions;
use crate::error::{Result, TinContourError};
use crate::mesh::VertexIdentity;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_parallel() -> bool {
    true
}

/// Configuration for a contour generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourConfig {
    /// Input mesh file path
    pub input_file: String,

    /// Contour interval (rounded to a whole unit)
    pub interval: f64,

    /// Vertex identity used when building the edge adjacency
    #[serde(default)]
    pub vertex_identity: VertexIdentity,

    /// Slice levels concurrently
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl ContourConfig {
    /// Create a configuration with exact vertex identity and parallel slicing
    pub fn new(input_file: String, interval: f64) -> Self {
        Self {
            input_file,
            interval,
            vertex_identity: VertexIdentity::Exact,
            parallel: true,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TinContourError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            TinContourError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            TinContourError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            TinContourError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Check parameter ranges. A non-positive interval is allowed and
    /// simply produces no contours.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_nan() {
            return Err(TinContourError::ConfigError(
                "Contour interval must be a number".to_string(),
            ));
        }
        self.vertex_identity.validate()
    }

    /// Runtime options for contour generation
    pub fn options(&self) -> ContourOptions {
        ContourOptions {
            interval: self.interval,
            parallel: self.parallel,
        }
    }
}
