//! Fixed-step "odometer" chase from displayed values toward accrued values.

use crate::models::{AccrualSnapshot, DisplaySnapshot};

/// Amount a displayed value moves toward its target on each tick.
pub const DISPLAY_STEP: f64 = 0.01;

/// Distance below which a displayed value snaps onto its target.
pub const SNAP_EPSILON: f64 = 0.01;

/// Moves one displayed value a single step toward `target`.
///
/// Snaps to the target when closer than [`SNAP_EPSILON`], otherwise moves by
/// exactly [`DISPLAY_STEP`] in the direction of the target. The distance to
/// the target therefore never grows and reaches zero after at most
/// `ceil(gap / DISPLAY_STEP)` calls.
///
/// # Example
///
/// ```
/// use paystream::calculation::chase;
///
/// assert_eq!(chase(10.0, 10.005), 10.005);
/// assert!((chase(10.0, 11.0) - 10.01).abs() < 1e-12);
/// assert!((chase(10.0, 9.0) - 9.99).abs() < 1e-12);
/// ```
pub fn chase(displayed: f64, target: f64) -> f64 {
    let gap = target - displayed;
    if gap.abs() < SNAP_EPSILON {
        target
    } else {
        displayed + gap.signum() * DISPLAY_STEP
    }
}

/// Advances both displayed values one step toward the accrued values.
pub fn advance_display(display: &mut DisplaySnapshot, target: &AccrualSnapshot) {
    display.displayed_earned = chase(display.displayed_earned, target.true_earned);
    display.displayed_other = chase(display.displayed_other, target.true_other);
}
