//! Structured cron expressions.
//!
//! An [`Expression`] is the already parsed form of a cron pattern: one list of
//! [`Condition`]s per [`Interval`]. The matcher only reads these values.

use derive_builder::Builder;
use strum::{Display, EnumIs, EnumIter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven time fields a condition list applies to.
///
/// The declaration order is the canonical evaluation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIs, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interval {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Weekday,
    Year,
}

/// What a step condition divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepBase {
    /// `*/n`, counted from zero.
    Any,
    /// `from-to/n`, counted from `from`.
    Range(i32, i32),
}

/// Target of a nearest-weekday (`W`) condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DayAnchor {
    /// A day of month; clamped to the month's last day when the month is shorter.
    Day(i32),
    /// `LW`, the last weekday of the month.
    LastDayOfMonth,
}

/// A single matching rule within a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Condition {
    /// `*`
    Any,
    /// An exact value.
    Number(i32),
    /// Inclusive range. When `from > to` the range wraps around, e.g. `22-3` on hours.
    Range(i32, i32),
    /// `base/divisor`
    Step(StepBase, u32),
    /// `L` in the day field.
    LastDayOfMonth,
    /// `nW` or `LW` in the day field.
    NearestWeekdayToDay(DayAnchor),
    /// `dL` in the weekday field: the last given ISO weekday of the month.
    LastWeekdayOccurrence(i32),
    /// `d#n` in the weekday field: the n-th given ISO weekday of the month.
    NthWeekdayOccurrence(i32, i32),
}

fn any() -> Vec<Condition> {
    vec![Condition::Any]
}

/// A parsed cron expression.
///
/// Every interval defaults to `[Any]`, so an expression only needs to state the
/// fields it restricts. An empty list never matches.
///
/// ```rust
/// use cronmatch::{Condition, Expression, Interval, StepBase};
///
/// let expression = Expression::builder()
///     .minute([Condition::Step(StepBase::Any, 8)])
///     .build();
///
/// assert_eq!(expression.conditions(Interval::Minute), &[Condition::Step(StepBase::Any, 8)]);
/// assert_eq!(expression.conditions(Interval::Hour), &[Condition::Any]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder)]
#[builder(default, build_fn(skip), pattern = "owned", setter(into))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Expression {
    /// `@reboot`, which cannot be matched against an instant.
    pub reboot: bool,
    /// Conditions on the second, 0-59.
    pub second: Vec<Condition>,
    /// Conditions on the minute, 0-59.
    pub minute: Vec<Condition>,
    /// Conditions on the hour, 0-23.
    pub hour: Vec<Condition>,
    /// Conditions on the day of month, 1-31.
    pub day: Vec<Condition>,
    /// Conditions on the month, 1-12.
    pub month: Vec<Condition>,
    /// Conditions on the ISO weekday, 1-7 with 0 also meaning Sunday.
    pub weekday: Vec<Condition>,
    /// Conditions on the year.
    pub year: Vec<Condition>,
}

impl Default for Expression {
    fn default() -> Self {
        Self {
            reboot: false,
            second: any(),
            minute: any(),
            hour: any(),
            day: any(),
            month: any(),
            weekday: any(),
            year: any(),
        }
    }
}

impl Expression {
    /// Construct a builder, leaving unset intervals as wildcards.
    pub fn builder() -> ExpressionBuilder {
        ExpressionBuilder::default()
    }

    /// An expression standing for the `@reboot` nickname.
    pub fn reboot() -> Self {
        Self {
            reboot: true,
            ..Self::default()
        }
    }

    /// The condition list of the given interval.
    pub fn conditions(&self, interval: Interval) -> &[Condition] {
        match interval {
            Interval::Second => &self.second,
            Interval::Minute => &self.minute,
            Interval::Hour => &self.hour,
            Interval::Day => &self.day,
            Interval::Month => &self.month,
            Interval::Weekday => &self.weekday,
            Interval::Year => &self.year,
        }
    }
}

impl ExpressionBuilder {
    pub fn build(self) -> Expression {
        let ExpressionBuilder {
            reboot,
            second,
            minute,
            hour,
            day,
            month,
            weekday,
            year,
        } = self;
        Expression {
            reboot: reboot.unwrap_or_default(),
            second: second.unwrap_or_else(any),
            minute: minute.unwrap_or_else(any),
            hour: hour.unwrap_or_else(any),
            day: day.unwrap_or_else(any),
            month: month.unwrap_or_else(any),
            weekday: weekday.unwrap_or_else(any),
            year: year.unwrap_or_else(any),
        }
    }
}
