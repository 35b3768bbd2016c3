//! Timer-driven evaluation of the earnings calculator.
//!
//! The calculator never owns a timer. This module supplies one as an
//! explicit [`Scheduler`] object with a cancellable task, an injectable
//! [`Clock`], and [`Frame`]s published once per tick.

mod clock;
mod frame;
mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame::Frame;
pub use ticker::{Scheduler, TickerController, TickerHandle, TickerState};
