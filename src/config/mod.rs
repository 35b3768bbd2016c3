//! Configuration loading and management for PayStream.
//!
//! This module loads the runtime configuration (ticker cadence, number
//! locale, listen address, quote endpoint and default salary settings)
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use paystream::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/paystream.yaml").unwrap();
//! println!("Locale: {:?}", config.config().locale);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_RATE_URL, DEFAULT_TICK_INTERVAL_MS, RateSourceConfig};
