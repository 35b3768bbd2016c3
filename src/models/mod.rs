//! Core data models for PayStream.
//!
//! This module contains the salary configuration and the snapshots produced
//! by the accrual calculator.

mod currency;
mod salary;
mod snapshot;

pub use currency::Currency;
pub use salary::{MAX_AMOUNT, MIN_RATE, MIN_SALARY, SalaryConfiguration};
pub use snapshot::{AccrualSnapshot, DisplaySnapshot};
