//! File-backed settings store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{PayStreamError, PayStreamResult};
use crate::models::SalaryConfiguration;

/// Namespaced key the settings record is stored under.
pub const STORAGE_KEY: &str = "paystream-salary-setup";

/// Reads and writes the persisted [`SalaryConfiguration`].
///
/// The record lives at `<dir>/paystream-salary-setup.json`.
///
/// # Example
///
/// ```no_run
/// use paystream::models::{Currency, SalaryConfiguration};
/// use paystream::settings::SettingsStore;
///
/// let store = SettingsStore::in_dir("/tmp/paystream");
/// store.save(&SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0))?;
/// assert!(store.load()?.is_some());
/// # Ok::<(), paystream::error::PayStreamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store keeping its record inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    /// Creates a store in the platform configuration directory.
    pub fn platform_default() -> PayStreamResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "paystream", "paystream").ok_or_else(
            || PayStreamError::SettingsIo {
                path: STORAGE_KEY.to_string(),
                message: "could not determine the configuration directory".to_string(),
            },
        )?;
        Ok(Self::in_dir(dirs.config_dir()))
    }

    /// Path of the settings record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored settings.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. A record that
    /// cannot be parsed or fails validation is ignored (with a warning) and
    /// also yields `Ok(None)`, so the caller falls back to its defaults.
    pub fn load(&self) -> PayStreamResult<Option<SalaryConfiguration>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let config: SalaryConfiguration = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable settings record");
                return Ok(None);
            }
        };
        if let Err(e) = config.validate() {
            warn!(path = %self.path.display(), error = %e, "Ignoring invalid settings record");
            return Ok(None);
        }

        Ok(Some(config))
    }

    /// Loads the stored settings, or returns `fallback` when there are none.
    pub fn load_or(&self, fallback: SalaryConfiguration) -> PayStreamResult<SalaryConfiguration> {
        Ok(self.load()?.unwrap_or(fallback))
    }

    /// Validates and writes the settings record.
    pub fn save(&self, config: &SalaryConfiguration) -> PayStreamResult<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string(config).map_err(|e| PayStreamError::SettingsIo {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            salary = config.salary,
            currency = %config.currency,
            rate = config.rate,
            "Saved salary settings"
        );
        Ok(())
    }

    fn io_error(&self, error: std::io::Error) -> PayStreamError {
        PayStreamError::SettingsIo {
            path: self.path.display().to_string(),
            message: error.to_string(),
        }
    }
}
