//! Accrual and display snapshots.

use serde::{Deserialize, Serialize};

/// The exact accrued values at one evaluation instant.
///
/// Recomputed from scratch on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccrualSnapshot {
    /// Salary earned so far this month, in the salary currency.
    pub true_earned: f64,
    /// `true_earned` converted into the other currency.
    pub true_other: f64,
    /// Elapsed fraction of the current calendar month, in `[0, 1]`.
    pub month_progress: f64,
}

/// The animated values shown on screen.
///
/// Chases an [`AccrualSnapshot`] by a fixed step per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Displayed earnings in the salary currency.
    pub displayed_earned: f64,
    /// Displayed earnings in the other currency.
    pub displayed_other: f64,
}

impl DisplaySnapshot {
    /// Returns a display snapshot sitting exactly on the accrued values.
    pub fn at(accrual: &AccrualSnapshot) -> Self {
        Self {
            displayed_earned: accrual.true_earned,
            displayed_other: accrual.true_other,
        }
    }
}

impl From<AccrualSnapshot> for DisplaySnapshot {
    fn from(accrual: AccrualSnapshot) -> Self {
        Self::at(&accrual)
    }
}
