//! Per-second, per-minute and per-hour earning rates.
//!
//! The rates use an approximate 30-day month so they stay constant across
//! months of different lengths.

use serde::{Deserialize, Serialize};

use crate::models::SalaryConfiguration;

/// Seconds in the approximate 30-day month used for rate breakdowns.
pub const APPROX_SECONDS_IN_MONTH: f64 = 30.0 * 24.0 * 60.0 * 60.0;

/// Time unit an earning rate is expressed per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// Per second.
    Second,
    /// Per minute.
    Minute,
    /// Per hour.
    Hour,
}

impl RateUnit {
    /// All units in display rotation order.
    pub const ALL: [RateUnit; 3] = [RateUnit::Second, RateUnit::Minute, RateUnit::Hour];

    /// Number of seconds in one unit.
    pub fn seconds(self) -> f64 {
        match self {
            RateUnit::Second => 1.0,
            RateUnit::Minute => 60.0,
            RateUnit::Hour => 3600.0,
        }
    }

    /// Short label shown after a rate.
    pub fn label(self) -> &'static str {
        match self {
            RateUnit::Second => "s",
            RateUnit::Minute => "min",
            RateUnit::Hour => "h",
        }
    }

    /// The next unit in the rotation, wrapping from hour back to second.
    pub fn next(self) -> Self {
        match self {
            RateUnit::Second => RateUnit::Minute,
            RateUnit::Minute => RateUnit::Hour,
            RateUnit::Hour => RateUnit::Second,
        }
    }
}

/// Earnings per unit of time, in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningRate {
    /// The time unit.
    pub unit: RateUnit,
    /// Amount earned per unit, in the salary currency.
    pub amount: f64,
    /// Amount earned per unit, in the other currency.
    pub other_amount: f64,
}

impl EarningRate {
    /// Computes the earning rate for a configuration and unit.
    ///
    /// # Example
    ///
    /// ```
    /// use paystream::calculation::{EarningRate, RateUnit};
    /// use paystream::models::{Currency, SalaryConfiguration};
    ///
    /// let config = SalaryConfiguration::new(2_592_000.0, Currency::Ars, 1000.0);
    /// let rate = EarningRate::for_config(&config, RateUnit::Second);
    /// assert_eq!(rate.amount, 1.0);
    /// assert_eq!(rate.other_amount, 0.001);
    /// ```
    pub fn for_config(config: &SalaryConfiguration, unit: RateUnit) -> Self {
        let per_second = config.salary / APPROX_SECONDS_IN_MONTH;
        let other_per_second = config.convert(config.salary) / APPROX_SECONDS_IN_MONTH;

        Self {
            unit,
            amount: per_second * unit.seconds(),
            other_amount: other_per_second * unit.seconds(),
        }
    }

    /// Computes the rates for every unit, in rotation order.
    pub fn all(config: &SalaryConfiguration) -> Vec<Self> {
        RateUnit::ALL
            .iter()
            .map(|unit| Self::for_config(config, *unit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;

    #[test]
    fn test_hourly_rate_for_usd_salary() {
        let config = SalaryConfiguration::new(7200.0, Currency::Usd, 1000.0);
        let rate = EarningRate::for_config(&config, RateUnit::Hour);

        assert!((rate.amount - 10.0).abs() < 1e-9);
        assert!((rate.other_amount - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_minute_is_sixty_seconds() {
        let config = SalaryConfiguration::default();
        let second = EarningRate::for_config(&config, RateUnit::Second);
        let minute = EarningRate::for_config(&config, RateUnit::Minute);

        assert!((minute.amount - second.amount * 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_follows_rotation_order() {
        let rates = EarningRate::all(&SalaryConfiguration::default());
        let units: Vec<RateUnit> = rates.iter().map(|r| r.unit).collect();
        assert_eq!(units, vec![RateUnit::Second, RateUnit::Minute, RateUnit::Hour]);
    }

    #[test]
    fn test_unit_rotation_wraps() {
        assert_eq!(RateUnit::Second.next(), RateUnit::Minute);
        assert_eq!(RateUnit::Hour.next(), RateUnit::Second);
    }
}
