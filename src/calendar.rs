//! Calendar providers.
//!
//! The matcher never does date arithmetic itself. Everything it needs, from
//! month boundaries to day shifts and weekdays, goes through the [`Calendar`]
//! trait so an alternative date backend can be plugged in without touching
//! the evaluation rules. [`ChronoCalendar`] is the default, backed by `chrono`.

use chrono::{Datelike, Duration, Months, NaiveDateTime, Timelike};

use crate::errors::CronError;
use crate::expression::Interval;

/// ISO weekday number of Saturday.
pub const SATURDAY: u32 = 6;
/// ISO weekday number of Sunday.
pub const SUNDAY: u32 = 7;

/// Pure calendar arithmetic over a local, already resolved timestamp.
///
/// Implementations must be free of side effects; the matcher may call them
/// any number of times for a single evaluation.
pub trait Calendar {
    /// The timestamp type this calendar operates on.
    type Timestamp;

    /// The last day of the timestamp's month, keeping the time of day.
    fn end_of_month(&self, time: &Self::Timestamp) -> Result<Self::Timestamp, CronError>;

    /// The first day of the timestamp's month, keeping the time of day.
    fn beginning_of_month(&self, time: &Self::Timestamp) -> Result<Self::Timestamp, CronError>;

    /// Moves the timestamp by `delta` days (negative values move backwards).
    fn shift_days(&self, time: &Self::Timestamp, delta: i64) -> Result<Self::Timestamp, CronError>;

    /// ISO weekday of the timestamp, Monday = 1 through Sunday = 7.
    fn weekday_of(&self, time: &Self::Timestamp) -> u32;

    /// Numeric value of the field addressed by `interval`.
    ///
    /// For [`Interval::Weekday`] this is the ISO weekday, without any Sunday aliasing.
    fn field(&self, time: &Self::Timestamp, interval: Interval) -> i32;

    /// Shorthand for the day of month.
    fn day(&self, time: &Self::Timestamp) -> i32 {
        self.field(time, Interval::Day)
    }
}

/// Calendar provider backed by `chrono::NaiveDateTime`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChronoCalendar;

impl Calendar for ChronoCalendar {
    type Timestamp = NaiveDateTime;

    fn end_of_month(&self, time: &NaiveDateTime) -> Result<NaiveDateTime, CronError> {
        time.with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.checked_sub_signed(Duration::days(1)))
            .ok_or(CronError::InvalidDate)
    }

    fn beginning_of_month(&self, time: &NaiveDateTime) -> Result<NaiveDateTime, CronError> {
        time.with_day(1).ok_or(CronError::InvalidDate)
    }

    fn shift_days(&self, time: &NaiveDateTime, delta: i64) -> Result<NaiveDateTime, CronError> {
        let delta = Duration::try_days(delta).ok_or(CronError::InvalidDate)?;
        time.checked_add_signed(delta).ok_or(CronError::InvalidDate)
    }

    fn weekday_of(&self, time: &NaiveDateTime) -> u32 {
        time.weekday().number_from_monday()
    }

    fn field(&self, time: &NaiveDateTime, interval: Interval) -> i32 {
        match interval {
            Interval::Second => time.second() as i32,
            Interval::Minute => time.minute() as i32,
            Interval::Hour => time.hour() as i32,
            Interval::Day => time.day() as i32,
            Interval::Month => time.month() as i32,
            Interval::Weekday => self.weekday_of(time) as i32,
            Interval::Year => time.year(),
        }
    }
}
