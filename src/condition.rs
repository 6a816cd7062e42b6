//! Evaluation of condition lists against a single field of a timestamp.

use crate::calendar::{Calendar, SUNDAY};
use crate::errors::CronError;
use crate::expression::{Condition, DayAnchor, Interval, StepBase};
use crate::walk;

/// Candidate values of `interval` for `time`.
///
/// Sunday resolves to both `0` and `7` so either cron spelling matches it.
pub fn resolve<C: Calendar>(calendar: &C, interval: Interval, time: &C::Timestamp) -> Vec<i32> {
    match interval {
        Interval::Weekday if calendar.weekday_of(time) == SUNDAY => vec![0, SUNDAY as i32],
        _ => vec![calendar.field(time, interval)],
    }
}

/// Checks whether any candidate value of `interval` satisfies any of `conditions`.
pub fn matches<C: Calendar>(
    calendar: &C,
    interval: Interval,
    conditions: &[Condition],
    time: &C::Timestamp,
) -> Result<bool, CronError> {
    if conditions.is_empty() {
        return Ok(false);
    }
    if conditions.iter().any(Condition::is_any) {
        return Ok(true);
    }

    for value in resolve(calendar, interval, time) {
        for condition in conditions {
            if evaluate(calendar, interval, value, condition, time)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn in_range(value: i32, from: i32, to: i32) -> bool {
    if from > to {
        value >= from || value <= to
    } else {
        from <= value && value <= to
    }
}

fn is_divisible(delta: i64, divisor: u32) -> bool {
    divisor != 0 && delta.rem_euclid(i64::from(divisor)) == 0
}

/// Checks a single candidate value against a single condition.
///
/// The arms overlap in shape, so their order decides which rule applies.
pub fn evaluate<C: Calendar>(
    calendar: &C,
    interval: Interval,
    value: i32,
    condition: &Condition,
    time: &C::Timestamp,
) -> Result<bool, CronError> {
    let matched = match (interval, condition) {
        (_, Condition::Range(from, to)) => in_range(value, *from, *to),
        // Steps never see the 0 alias of Sunday
        (Interval::Weekday, Condition::Step(..)) if value == 0 => false,
        (_, Condition::Step(StepBase::Range(from, to), divisor)) => {
            in_range(value, *from, *to)
                && is_divisible(i64::from(value) - i64::from(*from), *divisor)
        }
        (Interval::Day, Condition::LastDayOfMonth) => {
            value == calendar.day(&calendar.end_of_month(time)?)
        }
        (Interval::Weekday, Condition::LastWeekdayOccurrence(weekday)) => {
            walk::last_weekday(calendar, time, *weekday)? == Some(calendar.day(time))
        }
        (Interval::Weekday, Condition::NthWeekdayOccurrence(weekday, nth)) => {
            walk::nth_weekday(calendar, time, *weekday, *nth)? == Some(calendar.day(time))
        }
        (Interval::Day, Condition::NearestWeekdayToDay(DayAnchor::LastDayOfMonth)) => {
            walk::last_weekday_of_month(calendar, time)? == Some(calendar.day(time))
        }
        (Interval::Day, Condition::NearestWeekdayToDay(DayAnchor::Day(day))) => {
            let end = calendar.end_of_month(time)?;
            let anchor = if *day > calendar.day(&end) {
                end
            } else {
                let start = calendar.beginning_of_month(time)?;
                calendar.shift_days(&start, i64::from(*day) - 1)?
            };
            walk::next_weekday_to(calendar, &anchor)? == calendar.day(time)
        }
        (_, Condition::Step(StepBase::Any, divisor)) => is_divisible(i64::from(value), *divisor),
        (_, Condition::Number(number)) => value == *number,
        (_, Condition::Any) => true,
        _ => false,
    };
    Ok(matched)
}
