//! Calendar month windows.
//!
//! A [`MonthWindow`] is the half-open interval `[start of month, start of
//! next month)` in the time zone of the instant it was derived from. It is
//! never stored; every evaluation derives a fresh one from wall-clock time.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// The calendar month containing a given instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use paystream::calculation::MonthWindow;
///
/// let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
/// let window = MonthWindow::containing(&now);
///
/// assert_eq!(window.last_day(), 30);
/// assert_eq!(window.progress_at(&now), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonthWindow<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    last_day: u32,
}

impl<Tz: TimeZone> MonthWindow<Tz> {
    /// Derives the month window containing `now`, in `now`'s time zone.
    pub fn containing(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let (year, month) = (now.year(), now.month());
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        let first = first_of_month(year, month);
        let next_first = first_of_month(next_year, next_month);
        let last_day = next_first.pred_opt().map_or(31, |d| d.day());

        Self {
            start: resolve_local(&tz, first.and_time(NaiveTime::MIN)),
            end: resolve_local(&tz, next_first.and_time(NaiveTime::MIN)),
            last_day,
        }
    }

    /// First instant of the month.
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// First instant of the following month (exclusive bound).
    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Number of days in the month.
    pub fn last_day(&self) -> u32 {
        self.last_day
    }

    /// Elapsed fraction of the month at `now`, clamped to `[0, 1]`.
    pub fn progress_at<Tz2: TimeZone>(&self, now: &DateTime<Tz2>) -> f64 {
        let start = self.start.timestamp_micros();
        let total = self.end.timestamp_micros() - start;
        if total <= 0 {
            return 0.0;
        }
        let elapsed = now.timestamp_micros() - start;
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// Maps a local wall-clock time onto the zone, taking the earlier instant
/// when it is ambiguous and falling back to UTC when it does not exist.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&local)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}
