//! Configuration types for PayStream.
//!
//! This module contains the strongly-typed structures deserialized from
//! `config/paystream.yaml`. Every field has a default so a partial file is
//! accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::format::NumberLocale;
use crate::models::SalaryConfiguration;

/// Default ticker cadence.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Default quote endpoint.
pub const DEFAULT_RATE_URL: &str = "https://dolarapi.com/v1/ambito/dolares/oficial";

/// Where and how to fetch the ARS/USD quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSourceConfig {
    /// Endpoint returning a JSON object with a `venta` field.
    pub url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl RateSourceConfig {
    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RATE_URL.to_string(),
            timeout_ms: 5000,
        }
    }
}

/// The complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ticker cadence in milliseconds.
    pub tick_interval_ms: u64,
    /// Number formatting conventions.
    pub locale: NumberLocale,
    /// Address the HTTP API binds to.
    pub listen_addr: String,
    /// Exchange-rate lookup settings.
    pub rate_source: RateSourceConfig,
    /// Salary configuration used before the user saves their own.
    pub defaults: SalaryConfiguration,
}

impl AppConfig {
    /// Returns the ticker cadence.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            locale: NumberLocale::default(),
            listen_addr: "127.0.0.1:3000".to_string(),
            rate_source: RateSourceConfig::default(),
            defaults: SalaryConfiguration::default(),
        }
    }
}
