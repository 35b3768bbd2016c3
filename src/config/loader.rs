//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the runtime
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayStreamError, PayStreamResult};

use super::types::AppConfig;

/// Loads and validates the runtime configuration.
///
/// # Example
///
/// ```no_run
/// use paystream::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/paystream.yaml")?;
/// println!("Ticking every {:?}", loader.config().tick_interval());
/// # Ok::<(), paystream::error::PayStreamError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A value fails validation (zero tick interval, invalid defaults)
    pub fn load<P: AsRef<Path>>(path: P) -> PayStreamResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayStreamError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|e| match e {
            PayStreamError::ConfigParseError { message, .. } => PayStreamError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(content: &str) -> PayStreamResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| PayStreamError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AppConfig) -> PayStreamResult<Self> {
        if config.tick_interval_ms == 0 {
            return Err(PayStreamError::ConfigParseError {
                path: "<inline>".to_string(),
                message: "tick_interval_ms must be greater than zero".to_string(),
            });
        }
        config
            .defaults
            .validate()
            .map_err(|e| PayStreamError::ConfigParseError {
                path: "<inline>".to_string(),
                message: format!("defaults: {}", e),
            })?;
        Ok(Self { config })
    }

    /// Loads `path` when it exists, otherwise falls back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayStreamResult<Self> {
        match Self::load(path) {
            Err(PayStreamError::ConfigNotFound { path }) => {
                debug!(path = %path, "No configuration file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
