//! Calculation logic for PayStream.
//!
//! This module contains the month window arithmetic, the pure accrual
//! evaluation, the fixed-step display chase, the stateful
//! [`EarningsCalculator`] that combines them, and the per-unit rate and
//! day projections shown alongside the counter.

mod accrual;
mod calculator;
mod day_projection;
mod display_chase;
mod earning_rates;
mod month_window;

pub use accrual::evaluate;
pub use calculator::EarningsCalculator;
pub use day_projection::{day_at_fraction, day_progress, earnings_through_day, month_end_amounts};
pub use display_chase::{DISPLAY_STEP, SNAP_EPSILON, advance_display, chase};
pub use earning_rates::{APPROX_SECONDS_IN_MONTH, EarningRate, RateUnit};
pub use month_window::MonthWindow;
