//! Per-tick output published to display consumers.

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calculation::{EarningsCalculator, MonthWindow, day_progress};
use crate::models::{Currency, SalaryConfiguration};

/// Everything a renderer needs for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Animated earnings in the salary currency.
    pub displayed_earned: f64,
    /// Animated earnings in the other currency.
    pub displayed_other: f64,
    /// Exact earnings in the salary currency.
    pub true_earned: f64,
    /// Exact earnings in the other currency.
    pub true_other: f64,
    /// Elapsed fraction of the month.
    pub month_progress: f64,
    /// Day of the month the frame was computed on.
    pub day: u32,
    /// Number of days in the month.
    pub last_day: u32,
    /// The configuration the frame was computed from.
    pub config: SalaryConfiguration,
}

impl Frame {
    /// Captures the calculator's current state, as evaluated at `now`.
    pub fn capture<Tz: TimeZone>(calculator: &EarningsCalculator, now: &DateTime<Tz>) -> Self {
        let display = calculator.display();
        let accrual = calculator.accrual();
        let window = MonthWindow::containing(now);
        Self {
            displayed_earned: display.displayed_earned,
            displayed_other: display.displayed_other,
            true_earned: accrual.true_earned,
            true_other: accrual.true_other,
            month_progress: accrual.month_progress,
            day: now.day(),
            last_day: window.last_day(),
            config: *calculator.config(),
        }
    }

    /// Currency of `displayed_earned`.
    pub fn currency(&self) -> Currency {
        self.config.currency
    }

    /// Currency of `displayed_other`.
    pub fn other_currency(&self) -> Currency {
        self.config.other_currency()
    }

    /// Position of the frame's day on the month's day scale.
    pub fn day_progress(&self) -> f64 {
        day_progress(self.day, self.last_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_capture_records_day_position() {
        let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
        let calculator =
            EarningsCalculator::new(SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0), &now);

        let frame = Frame::capture(&calculator, &now);

        assert_eq!(frame.day, 16);
        assert_eq!(frame.last_day, 30);
        assert_eq!(frame.day_progress(), 15.0 / 29.0);
        assert_eq!(frame.displayed_earned, 1500.0);
        assert_eq!(frame.other_currency(), Currency::Usd);
    }

    #[test]
    fn test_capture_uses_instant_time_zone() {
        // 2026-03-01 01:00 UTC is still February 28th in Buenos Aires.
        let art = FixedOffset::west_opt(3 * 3600).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 1, 0, 0).unwrap().with_timezone(&art);
        let calculator = EarningsCalculator::new(SalaryConfiguration::default(), &now);

        let frame = Frame::capture(&calculator, &now);

        assert_eq!(frame.day, 28);
        assert_eq!(frame.last_day, 28);
        assert_eq!(frame.day_progress(), 1.0);
    }
}
