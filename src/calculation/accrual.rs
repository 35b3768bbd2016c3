//! Earnings accrual for the elapsed fraction of the current month.

use chrono::{DateTime, TimeZone};

use crate::models::{AccrualSnapshot, SalaryConfiguration};

use super::MonthWindow;

/// Evaluates how much of the monthly salary has accrued at `now`.
///
/// The month is the calendar month containing `now` in `now`'s own time
/// zone. Progress is the elapsed fraction of that month, earned is the
/// salary scaled by progress and the other amount follows the currency
/// conversion rule (ARS divides by the rate, USD multiplies by it).
///
/// Pure and deterministic. Salary and rate are validated upstream, so this
/// never fails.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use paystream::calculation::evaluate;
/// use paystream::models::{Currency, SalaryConfiguration};
///
/// let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
/// // April 2026 has 30 days, so the 16th at midnight is the midpoint.
/// let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
///
/// let snapshot = evaluate(&config, &now);
/// assert_eq!(snapshot.month_progress, 0.5);
/// assert_eq!(snapshot.true_earned, 1500.0);
/// assert_eq!(snapshot.true_other, 1.5);
/// ```
pub fn evaluate<Tz: TimeZone>(config: &SalaryConfiguration, now: &DateTime<Tz>) -> AccrualSnapshot {
    let month_progress = MonthWindow::containing(now).progress_at(now);
    let true_earned = config.salary * month_progress;
    let true_other = config.convert(true_earned);

    AccrualSnapshot {
        true_earned,
        true_other,
        month_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_midpoint_ars_scenario() {
        let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
        let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();

        let snapshot = evaluate(&config, &now);

        assert_eq!(snapshot.month_progress, 0.5);
        assert_eq!(snapshot.true_earned, 1500.0);
        assert_eq!(snapshot.true_other, 1.5);
    }

    #[test]
    fn test_usd_salary_converts_by_multiplication() {
        let config = SalaryConfiguration::new(1200.0, Currency::Usd, 1000.0);
        let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();

        let snapshot = evaluate(&config, &now);

        assert_eq!(snapshot.true_earned, 600.0);
        assert_eq!(snapshot.true_other, 600_000.0);
    }

    #[test]
    fn test_first_instant_of_month_earns_nothing() {
        let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
        let now = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();

        let snapshot = evaluate(&config, &now);

        assert_eq!(snapshot.month_progress, 0.0);
        assert_eq!(snapshot.true_earned, 0.0);
        assert_eq!(snapshot.true_other, 0.0);
    }

    #[test]
    fn test_last_instant_before_rollover_earns_almost_full_salary() {
        let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap() - Duration::milliseconds(1);

        let snapshot = evaluate(&config, &now);

        assert!(snapshot.month_progress < 1.0);
        assert!((config.salary - snapshot.true_earned) < 0.001);
    }

    #[test]
    fn test_other_amount_round_trips_through_opposite_currency() {
        let rate = 1375.0;
        let now = Utc.with_ymd_and_hms(2026, 9, 9, 17, 3, 12).unwrap();
        let ars = SalaryConfiguration::new(2_500_000.0, Currency::Ars, rate);
        let forward = evaluate(&ars, &now);

        let usd = SalaryConfiguration::new(ars.salary / rate, Currency::Usd, rate);
        let back = evaluate(&usd, &now);

        assert!(approx_eq(back.true_earned, forward.true_other));
        assert!(approx_eq(back.true_other, forward.true_earned));
    }

    proptest! {
        #[test]
        fn prop_month_progress_is_bounded(
            salary in 1.0f64..10_000_000.0,
            rate in 1.0f64..5_000.0,
            usd in any::<bool>(),
            secs in 0i64..(200 * 365 * 24 * 3600),
        ) {
            let currency = if usd { Currency::Usd } else { Currency::Ars };
            let config = SalaryConfiguration::new(salary, currency, rate);
            let now = Utc.timestamp_opt(946_684_800 + secs, 0).unwrap();

            let snapshot = evaluate(&config, &now);

            prop_assert!((0.0..=1.0).contains(&snapshot.month_progress));
            prop_assert!(approx_eq(snapshot.true_earned, salary * snapshot.month_progress));
            prop_assert!(snapshot.true_earned <= salary);
        }
    }
}
