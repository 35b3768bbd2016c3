//! The stateful earnings calculator.
//!
//! [`EarningsCalculator`] owns the one piece of inter-tick memory in the
//! system, the [`DisplaySnapshot`]. It has no timer of its own: a scheduler
//! calls [`EarningsCalculator::tick`] on a fixed cadence and
//! [`EarningsCalculator::reset`] whenever the configuration changes.

use chrono::{DateTime, TimeZone};

use crate::models::{AccrualSnapshot, DisplaySnapshot, SalaryConfiguration};

use super::{advance_display, evaluate};

/// Accrual calculator with an animated display view.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use paystream::calculation::EarningsCalculator;
/// use paystream::models::{Currency, SalaryConfiguration};
///
/// let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
/// let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
/// let mut calculator = EarningsCalculator::new(config, &now);
/// assert_eq!(calculator.display().displayed_earned, 1500.0);
///
/// // One minute later the true value has moved ahead of the display,
/// // which follows one cent per tick.
/// let later = now + Duration::minutes(1);
/// let accrual = calculator.tick(&later);
/// assert!(accrual.true_earned > calculator.display().displayed_earned);
/// ```
#[derive(Debug, Clone)]
pub struct EarningsCalculator {
    config: SalaryConfiguration,
    accrual: AccrualSnapshot,
    display: DisplaySnapshot,
}

impl EarningsCalculator {
    /// Creates a calculator whose display starts on the true values at `now`.
    pub fn new<Tz: TimeZone>(config: SalaryConfiguration, now: &DateTime<Tz>) -> Self {
        let accrual = evaluate(&config, now);
        Self {
            config,
            accrual,
            display: DisplaySnapshot::at(&accrual),
        }
    }

    /// Evaluates the active configuration at `now` without touching the display.
    pub fn evaluate<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> AccrualSnapshot {
        evaluate(&self.config, now)
    }

    /// Re-evaluates at `now`, then moves the display one step toward it.
    ///
    /// Evaluation always runs before the chase step so the display targets
    /// the freshest value.
    pub fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> AccrualSnapshot {
        self.accrual = evaluate(&self.config, now);
        advance_display(&mut self.display, &self.accrual);
        self.accrual
    }

    /// Replaces the configuration and jumps the display to the new values.
    pub fn reset<Tz: TimeZone>(&mut self, config: SalaryConfiguration, now: &DateTime<Tz>) {
        self.config = config;
        self.accrual = evaluate(&self.config, now);
        self.display = DisplaySnapshot::at(&self.accrual);
    }

    /// The active configuration.
    pub fn config(&self) -> &SalaryConfiguration {
        &self.config
    }

    /// The values the display is currently showing.
    pub fn display(&self) -> &DisplaySnapshot {
        &self.display
    }

    /// The most recent accrual evaluation.
    pub fn accrual(&self) -> &AccrualSnapshot {
        &self.accrual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DISPLAY_STEP;
    use crate::models::{Currency, MAX_AMOUNT};
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn midpoint() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_starts_on_true_values() {
        let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
        let calculator = EarningsCalculator::new(config, &midpoint());

        assert_eq!(calculator.display().displayed_earned, 1500.0);
        assert_eq!(calculator.display().displayed_other, 1.5);
        assert_eq!(calculator.accrual().month_progress, 0.5);
    }

    #[test]
    fn test_tick_chases_by_one_step() {
        let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
        let mut calculator = EarningsCalculator::new(config, &midpoint());

        // An hour of accrual is worth ~4.03 ARS, far more than one step.
        let later = midpoint() + Duration::hours(1);
        let accrual = calculator.tick(&later);

        assert!(accrual.true_earned - 1500.0 > 4.0);
        assert!((calculator.display().displayed_earned - (1500.0 + DISPLAY_STEP)).abs() < 1e-9);
        // The USD side moved less than a cent and snaps.
        assert_eq!(calculator.display().displayed_other, accrual.true_other);
    }

    #[test]
    fn test_tick_is_idempotent_at_convergence() {
        let config = SalaryConfiguration::new(3000.0, Currency::Ars, 1000.0);
        let mut calculator = EarningsCalculator::new(config, &midpoint());

        let before = *calculator.display();
        for _ in 0..5 {
            calculator.tick(&midpoint());
        }

        assert_eq!(*calculator.display(), before);
    }

    #[test]
    fn test_reset_jumps_without_chase() {
        let now = midpoint();
        let mut calculator =
            EarningsCalculator::new(SalaryConfiguration::new(1200.0, Currency::Ars, 1000.0), &now);
        assert_eq!(calculator.display().displayed_earned, 600.0);

        let updated = SalaryConfiguration::new(2400.0, Currency::Ars, 500.0);
        calculator.reset(updated, &now);

        assert_eq!(calculator.config(), &updated);
        assert_eq!(calculator.display().displayed_earned, 1200.0);
        assert_eq!(calculator.display().displayed_other, 2.4);
    }

    #[test]
    fn test_evaluate_does_not_touch_display() {
        let config = SalaryConfiguration::new(3000.0, Currency::Usd, 1000.0);
        let calculator = EarningsCalculator::new(config, &midpoint());

        let later = calculator.evaluate(&(midpoint() + Duration::days(2)));

        assert!(later.true_earned > calculator.display().displayed_earned);
        assert_eq!(calculator.display().displayed_earned, 1500.0);
    }

    #[test]
    fn test_tick_still_moves_at_maximum_amount() {
        let config = SalaryConfiguration::new(MAX_AMOUNT, Currency::Ars, 1.0);
        assert!(config.validate().is_ok());
        let mut calculator = EarningsCalculator::new(config, &midpoint());
        let before = calculator.display().displayed_earned;

        let later = midpoint() + Duration::hours(1);
        for _ in 0..1000 {
            calculator.tick(&later);
        }

        let moved = calculator.display().displayed_earned - before;
        // Each step rounds to the nearest representable value near 5e11.
        assert!((moved - 1000.0 * DISPLAY_STEP).abs() < 0.1, "moved {}", moved);
        assert!(calculator.display().displayed_earned < calculator.accrual().true_earned);
    }

    proptest! {
        #[test]
        fn prop_tick_is_monotone(
            salary in 1.0f64..1_000_000.0,
            offset_secs in 0i64..(5 * 24 * 3600),
            ticks in 1usize..50,
        ) {
            let config = SalaryConfiguration::new(salary, Currency::Ars, 1000.0);
            let start = Utc.with_ymd_and_hms(2026, 4, 3, 0, 0, 0).unwrap();
            let mut calculator = EarningsCalculator::new(config, &start);
            let target_time = start + Duration::seconds(offset_secs);
            let target = calculator.evaluate(&target_time);

            let mut gap = (target.true_earned - calculator.display().displayed_earned).abs();
            for _ in 0..ticks {
                calculator.tick(&target_time);
                let next_gap = (target.true_earned - calculator.display().displayed_earned).abs();
                prop_assert!(next_gap <= gap + 1e-9);
                gap = next_gap;
            }
        }
    }
}
