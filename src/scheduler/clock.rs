//! Wall-clock sources for the ticker.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// Source of "now" for accrual evaluation.
///
/// The month window is derived in the clock's own time zone.
pub trait Clock: Send + Sync + 'static {
    /// Time zone of the instants this clock returns.
    type Tz: TimeZone;

    /// The current instant.
    fn now(&self) -> DateTime<Self::Tz>;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock stopped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    type Tz = Utc;

    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock> Clock for std::sync::Arc<C> {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<Self::Tz> {
        C::now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let start = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
        let clock = ManualClock::new(start);

        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_arc_clock_delegates() {
        let start = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
        let clock = std::sync::Arc::new(ManualClock::new(start));
        let shared = clock.clone();

        clock.advance(Duration::seconds(1));

        assert_eq!(Clock::now(&shared), start + Duration::seconds(1));
    }
}
