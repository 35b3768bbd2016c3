//! Error types for PayStream.
//!
//! The accrual core never fails. Everything around it (settings validation,
//! persistence, configuration loading, the exchange-rate lookup and the
//! scheduler handle) reports failures through [`PayStreamError`].

use thiserror::Error;

/// The main error type for PayStream.
///
/// # Example
///
/// ```
/// use paystream::error::PayStreamError;
///
/// let error = PayStreamError::ConfigNotFound {
///     path: "/missing/paystream.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/paystream.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayStreamError {
    /// A salary configuration value was rejected at the settings boundary.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSettings {
        /// The offending field (`salary`, `rate` or `currency`).
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persisted settings record could not be read or written.
    #[error("Settings storage error at '{path}': {message}")]
    SettingsIo {
        /// The settings file path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The remote exchange-rate lookup failed.
    #[error("Exchange rate lookup failed: {message}")]
    RateLookup {
        /// A description of the failure.
        message: String,
    },

    /// The ticker cadence must be greater than zero.
    #[error("Tick interval must be greater than zero")]
    InvalidTickInterval,

    /// The ticker task is no longer running.
    #[error("Scheduler is not running")]
    SchedulerStopped,
}

/// A type alias for Results that return PayStreamError.
pub type PayStreamResult<T> = Result<T, PayStreamError>;
