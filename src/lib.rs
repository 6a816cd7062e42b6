//! # Cronmatch
//!
//! Cronmatch decides whether a calendar timestamp satisfies a parsed cron expression.
//!
//! ## Features
//! - Membership testing for all seven cron fields, from seconds to years.
//! - Inclusive and wraparound ranges (`22-3`), steps on wildcards and ranges (`*/4`, `5-20/5`).
//! - Extended day syntax: last day of month (`L`), nearest weekday (`15W`, `LW`).
//! - Extended weekday syntax: last occurrence (`5L`) and nth occurrence (`5#2`).
//! - Sunday matches both `0` and `7`.
//! - Pluggable calendar arithmetic through the [`Calendar`] trait, with a `chrono` backend out of the box.
//!
//! ## Example
//! The following example checks a few instants against the expression `*/8` in the minute field:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cronmatch::{ChronoCalendar, Condition, DateMatcher, Expression, StepBase};
//!
//! let matcher = DateMatcher::new(ChronoCalendar);
//! let expression = Expression::builder()
//!     .minute([Condition::Step(StepBase::Any, 8)])
//!     .build();
//!
//! let time = NaiveDate::from_ymd_opt(2004, 4, 16)
//!     .unwrap()
//!     .and_hms_opt(4, 8, 8)
//!     .unwrap();
//!
//! assert!(matcher.evaluate(&expression, &time).unwrap());
//! ```
//!
//! Parsing pattern text into an [`Expression`] and computing upcoming occurrences are
//! left to the caller; this crate only answers "does this instant match".
//!
//! ## Fields
//!
//! | Interval | Values          | Extended conditions                                   |
//! | -------- | --------------- | ----------------------------------------------------- |
//! | Second   | 0-59            |                                                       |
//! | Minute   | 0-59            |                                                       |
//! | Hour     | 0-23            |                                                       |
//! | Day      | 1-31            | `LastDayOfMonth`, `NearestWeekdayToDay`               |
//! | Month    | 1-12            |                                                       |
//! | Weekday  | 1-7, 0 = Sunday | `LastWeekdayOccurrence`, `NthWeekdayOccurrence`       |
//! | Year     | any             |                                                       |

pub mod calendar;
pub mod condition;
pub mod errors;
pub mod expression;
pub mod walk;

pub use calendar::{Calendar, ChronoCalendar};
pub use errors::CronError;
pub use expression::{Condition, DayAnchor, Expression, ExpressionBuilder, Interval, StepBase};

use chrono::{DateTime, TimeZone};
use strum::IntoEnumIterator;

/// Matches timestamps against cron expressions using an injected [`Calendar`].
///
/// The matcher holds no state besides its calendar and can be shared freely
/// between threads when the calendar can.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateMatcher<C = ChronoCalendar> {
    calendar: C,
}

impl<C: Calendar> DateMatcher<C> {
    /// Creates a matcher that does its date arithmetic through `calendar`.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The calendar this matcher was built with.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Evaluates if a timestamp matches the expression.
    ///
    /// Each interval is checked in canonical order (second, minute, hour, day,
    /// month, weekday, year) and all of them must match. Evaluation stops at the
    /// first interval that does not.
    ///
    /// # Errors
    ///
    /// - `CronError::UnsupportedFeature`: the expression is `@reboot`.
    /// - Any error raised by the calendar is passed through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cronmatch::{Condition, DateMatcher, Expression};
    ///
    /// let matcher: DateMatcher = DateMatcher::default();
    /// let expression = Expression::builder()
    ///     .day([Condition::LastDayOfMonth])
    ///     .build();
    ///
    /// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// assert!(matcher.evaluate(&expression, &leap_day).unwrap());
    ///
    /// assert!(matcher.evaluate(&Expression::reboot(), &leap_day).is_err());
    /// ```
    pub fn evaluate(&self, expression: &Expression, time: &C::Timestamp) -> Result<bool, CronError> {
        if expression.reboot {
            tracing::debug!("rejecting @reboot expression");
            return Err(CronError::UnsupportedFeature("@reboot".to_string()));
        }

        for interval in Interval::iter() {
            if !self.matches_interval(interval, expression.conditions(interval), time)? {
                tracing::trace!(%interval, "interval does not match");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluates a single interval's condition list against a timestamp.
    pub fn matches_interval(
        &self,
        interval: Interval,
        conditions: &[Condition],
        time: &C::Timestamp,
    ) -> Result<bool, CronError> {
        condition::matches(&self.calendar, interval, conditions, time)
    }
}

impl DateMatcher<ChronoCalendar> {
    /// Evaluates a zoned `DateTime` by its local wall-clock fields.
    ///
    /// No conversion takes place: 09:00 in Tokyo and 09:00 in New York both
    /// match an expression for hour 9.
    pub fn is_time_matching<Tz: TimeZone>(
        &self,
        expression: &Expression,
        time: &DateTime<Tz>,
    ) -> Result<bool, CronError> {
        self.evaluate(expression, &time.naive_local())
    }
}
