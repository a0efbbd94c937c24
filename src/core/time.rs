//! Calendar time primitives shared by the tick generator, the rail chain and
//! the clock.
//!
//! All dates are naive calendar dates. A `TimePoint` is the number of seconds
//! between the Unix epoch and a naive date-time read as if it were UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// An instant on the timeline, in seconds since 1970-01-01T00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TimePoint(pub i64);

impl TimePoint {
    /// Value held by the clock before any data has loaded.
    pub const SENTINEL: TimePoint = TimePoint(0);

    pub fn seconds(self) -> i64 {
        self.0
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_datetime(date.and_time(chrono::NaiveTime::MIN))
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        TimePoint(datetime.and_utc().timestamp())
    }

    /// Calendar date-time for this point. `None` only for values outside
    /// chrono's representable range.
    pub fn to_datetime(self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp(self.0, 0).map(|dt| dt.naive_utc())
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        self.to_datetime().map(|dt| dt.date())
    }

    pub fn add_days(self, days: i64) -> Self {
        TimePoint(self.0.saturating_add(days.saturating_mul(SECONDS_PER_DAY)))
    }

    /// Same day-of-month `months` later, clamped to the end of shorter months.
    pub fn add_months(self, months: i32) -> Self {
        let Some(datetime) = self.to_datetime() else {
            return self;
        };
        let shifted = if months >= 0 {
            datetime.checked_add_months(chrono::Months::new(months as u32))
        } else {
            datetime.checked_sub_months(chrono::Months::new(months.unsigned_abs()))
        };
        shifted.map(Self::from_datetime).unwrap_or(self)
    }

    /// `yyyy-MM-dd`, or the raw seconds if the value has no calendar date.
    pub fn format_ymd(self) -> String {
        match self.to_date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => format!("{}s", self.0),
        }
    }
}

impl From<NaiveDate> for TimePoint {
    fn from(date: NaiveDate) -> Self {
        TimePoint::from_date(date)
    }
}

/// A closed pair of time points. `start <= end` is the expected invariant but
/// it is checked by consumers through [`Interval::is_degenerate`] rather than
/// enforced here, so derived intervals can degrade gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl Interval {
    pub fn new(start: TimePoint, end: TimePoint) -> Self {
        Self { start, end }
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start.into(), end.into())
    }

    /// True when the interval has no positive extent (start >= end).
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Length in seconds, zero for degenerate intervals.
    pub fn span_seconds(&self) -> i64 {
        (self.end.0 - self.start.0).max(0)
    }

    pub fn contains(&self, t: TimePoint) -> bool {
        self.start <= t && t <= self.end
    }

    pub fn clamp(&self, t: TimePoint) -> TimePoint {
        if self.is_degenerate() {
            return self.start;
        }
        t.clamp(self.start, self.end)
    }
}

#[cfg(test)]
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> TimePoint {
    TimePoint::from_date(NaiveDate::from_ymd_opt(year, month, day).expect("valid test date"))
}
