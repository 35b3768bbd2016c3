//! Salary configuration model.
//!
//! This module contains [`SalaryConfiguration`], the three scalar inputs the
//! accrual calculator borrows on every tick.

use serde::{Deserialize, Serialize};

use crate::error::{PayStreamError, PayStreamResult};

use super::Currency;

/// Smallest salary accepted at the settings boundary.
pub const MIN_SALARY: f64 = 1.0;

/// Smallest exchange rate accepted at the settings boundary.
pub const MIN_RATE: f64 = 1.0;

/// Largest monthly amount accepted on either side of the conversion.
///
/// Above roughly `1.4e14` adding one cent to an `f64` no longer changes it,
/// so the display chase would stall.
pub const MAX_AMOUNT: f64 = 1e12;

/// A user's monthly salary together with its currency and the ARS/USD rate.
///
/// Replaced wholesale whenever the user edits settings. The persisted JSON
/// form is `{"salary": 1200.0, "currency": "USD", "rate": 1000.0}`.
///
/// # Example
///
/// ```
/// use paystream::models::{Currency, SalaryConfiguration};
///
/// let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.convert(1500.0), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfiguration {
    /// Monthly gross amount, in `currency`.
    pub salary: f64,
    /// Currency the salary is paid in.
    pub currency: Currency,
    /// Units of ARS per USD.
    pub rate: f64,
}

impl SalaryConfiguration {
    /// Creates a configuration without validating it.
    pub fn new(salary: f64, currency: Currency, rate: f64) -> Self {
        Self {
            salary,
            currency,
            rate,
        }
    }

    /// Checks the values the calculator relies on.
    ///
    /// Salary and rate must both be finite and at least 1. A rate of 0 is the
    /// "unknown" sentinel returned by a failed quote lookup and is rejected
    /// here so it can never be used as a divisor. The salary and its
    /// converted amount must not exceed [`MAX_AMOUNT`].
    pub fn validate(&self) -> PayStreamResult<()> {
        if !self.salary.is_finite() || self.salary < MIN_SALARY {
            return Err(PayStreamError::InvalidSettings {
                field: "salary".to_string(),
                message: format!("must be at least {}, got {}", MIN_SALARY, self.salary),
            });
        }
        if self.salary > MAX_AMOUNT {
            return Err(PayStreamError::InvalidSettings {
                field: "salary".to_string(),
                message: format!("must be at most {}, got {}", MAX_AMOUNT, self.salary),
            });
        }
        if !self.rate.is_finite() || self.rate < MIN_RATE {
            return Err(PayStreamError::InvalidSettings {
                field: "rate".to_string(),
                message: format!("must be at least {}, got {}", MIN_RATE, self.rate),
            });
        }
        let converted = self.convert(self.salary);
        if converted > MAX_AMOUNT {
            return Err(PayStreamError::InvalidSettings {
                field: "rate".to_string(),
                message: format!(
                    "converts the salary to {} {}, above the maximum of {}",
                    converted,
                    self.other_currency(),
                    MAX_AMOUNT
                ),
            });
        }
        Ok(())
    }

    /// Converts an amount held in the salary currency into the other currency.
    pub fn convert(&self, amount: f64) -> f64 {
        self.currency.convert(amount, self.rate)
    }

    /// Returns the currency the converted amounts are expressed in.
    pub fn other_currency(&self) -> Currency {
        self.currency.other()
    }
}

impl Default for SalaryConfiguration {
    fn default() -> Self {
        Self::new(1200.0, Currency::Usd, 1000.0)
    }
}
