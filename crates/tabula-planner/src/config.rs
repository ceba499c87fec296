//! Planner configuration (tabula.toml)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    ValidationError(String),
}

/// Settings of the expression lowering layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Deepest expression nesting accepted before lowering is aborted
    #[serde(default = "default_max_expression_depth")]
    pub max_expression_depth: usize,
}

fn default_max_expression_depth() -> usize {
    128
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expression_depth: default_max_expression_depth(),
        }
    }
}

impl PlannerConfig {
    /// Parse config from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), ?config, "loaded planner config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expression_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_expression_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
