//! Day-granular projections over the current month.
//!
//! These back the progress bar: where today sits on a day scale and how
//! much will have been earned by the end of any given day. The month length
//! comes from [`MonthWindow::last_day`](super::MonthWindow::last_day).

use crate::models::SalaryConfiguration;

/// Position of `day` on a day scale running from the 1st (0.0) to the
/// last day of the month (1.0).
///
/// # Example
///
/// ```
/// use paystream::calculation::day_progress;
///
/// assert_eq!(day_progress(1, 30), 0.0);
/// assert_eq!(day_progress(30, 30), 1.0);
/// assert_eq!(day_progress(16, 31), 0.5);
/// ```
pub fn day_progress(day: u32, last_day: u32) -> f64 {
    if last_day <= 1 {
        return 0.0;
    }
    let day = day.clamp(1, last_day);
    f64::from(day - 1) / f64::from(last_day - 1)
}

/// Day of the month under a pointer placed at `fraction` along the bar.
pub fn day_at_fraction(fraction: f64, last_day: u32) -> u32 {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    (fraction * f64::from(last_day.saturating_sub(1))).round() as u32 + 1
}

/// Earnings accrued by the end of `day`, in both currencies.
///
/// Uses an even split of the salary across the month's days.
pub fn earnings_through_day(config: &SalaryConfiguration, day: u32, last_day: u32) -> (f64, f64) {
    let last_day = f64::from(last_day.max(1));
    let day = f64::from(day);
    let earned = config.salary / last_day * day;
    let other = config.convert(config.salary) / last_day * day;
    (earned, other)
}

/// The largest amounts the counter can reach: the full monthly salary in
/// both currencies.
pub fn month_end_amounts(config: &SalaryConfiguration) -> (f64, f64) {
    (config.salary, config.convert(config.salary))
}
