//! Bounded day-by-day walks over a calendar month.
//!
//! Each walk takes at most [`MAX_WALK_DAYS`] steps and returns day-of-month numbers.

use crate::calendar::{Calendar, SATURDAY, SUNDAY};
use crate::errors::CronError;
use crate::expression::Interval;

/// No month has more days than this.
pub const MAX_WALK_DAYS: usize = 31;

// Weekday 0 is accepted as Sunday
fn is_same_weekday(iso: u32, weekday: i32) -> bool {
    (0..=7).contains(&weekday) && iso as i32 % 7 == weekday % 7
}

/// Day of the last `weekday` in the timestamp's month.
pub fn last_weekday<C: Calendar>(
    calendar: &C,
    time: &C::Timestamp,
    weekday: i32,
) -> Result<Option<i32>, CronError> {
    let mut candidate = calendar.end_of_month(time)?;
    for _ in 0..MAX_WALK_DAYS {
        if is_same_weekday(calendar.weekday_of(&candidate), weekday) {
            return Ok(Some(calendar.day(&candidate)));
        }
        candidate = calendar.shift_days(&candidate, -1)?;
    }
    Ok(None)
}

/// Day of the `nth` occurrence of `weekday` in the timestamp's month.
///
/// Returns `None` when the month has fewer than `nth` such weekdays. For
/// `nth == 0` the day before the first of the month is returned.
pub fn nth_weekday<C: Calendar>(
    calendar: &C,
    time: &C::Timestamp,
    weekday: i32,
    nth: i32,
) -> Result<Option<i32>, CronError> {
    let start = calendar.beginning_of_month(time)?;
    if nth == 0 {
        let previous = calendar.shift_days(&start, -1)?;
        return Ok(Some(calendar.day(&previous)));
    }

    let month = calendar.field(&start, Interval::Month);
    let mut remaining = nth;
    let mut candidate = start;
    for _ in 0..MAX_WALK_DAYS {
        if calendar.field(&candidate, Interval::Month) != month {
            break;
        }
        if is_same_weekday(calendar.weekday_of(&candidate), weekday) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(Some(calendar.day(&candidate)));
            }
        }
        candidate = calendar.shift_days(&candidate, 1)?;
    }
    Ok(None)
}

/// Day of the last Monday to Friday in the timestamp's month.
pub fn last_weekday_of_month<C: Calendar>(
    calendar: &C,
    time: &C::Timestamp,
) -> Result<Option<i32>, CronError> {
    let mut candidate = calendar.end_of_month(time)?;
    for _ in 0..MAX_WALK_DAYS {
        if calendar.weekday_of(&candidate) < SATURDAY {
            return Ok(Some(calendar.day(&candidate)));
        }
        candidate = calendar.shift_days(&candidate, -1)?;
    }
    Ok(None)
}

/// Day of the weekday nearest to `time`.
///
/// Saturday moves back to Friday and Sunday forward to Monday, unless that
/// would leave the month, in which case the shift goes the other way.
pub fn next_weekday_to<C: Calendar>(calendar: &C, time: &C::Timestamp) -> Result<i32, CronError> {
    let month = calendar.field(time, Interval::Month);
    let (towards, away) = match calendar.weekday_of(time) {
        SUNDAY => (1, -2),
        SATURDAY => (-1, 2),
        _ => return Ok(calendar.day(time)),
    };

    let shifted = calendar.shift_days(time, towards)?;
    if calendar.field(&shifted, Interval::Month) == month {
        Ok(calendar.day(&shifted))
    } else {
        Ok(calendar.day(&calendar.shift_days(time, away)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ChronoCalendar;
    use chrono::{NaiveDate, NaiveDateTime};
    use rstest::rstest;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[rstest]
    #[case(at(2023, 12, 4), 5, Some(29))] // last Friday of 2023
    #[case(at(2024, 6, 1), 7, Some(30))] // month ends on a Sunday
    #[case(at(2024, 6, 1), 0, Some(30))] // 0 is Sunday too
    #[case(at(2024, 2, 10), 4, Some(29))]
    #[case(at(2024, 2, 10), 8, None)]
    fn test_last_weekday(
        #[case] time: NaiveDateTime,
        #[case] weekday: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(last_weekday(&ChronoCalendar, &time, weekday).unwrap(), expected);
    }

    #[rstest]
    #[case(at(2024, 4, 20), 5, 2, Some(12))]
    #[case(at(2024, 4, 20), 1, 1, Some(1))]
    #[case(at(2023, 12, 1), 5, 5, Some(29))]
    #[case(at(2024, 6, 10), 7, 5, Some(30))]
    #[case(at(2024, 2, 2), 5, 5, None)] // February 2024 has four Fridays
    #[case(at(2024, 2, 2), 5, -1, None)]
    fn test_nth_weekday(
        #[case] time: NaiveDateTime,
        #[case] weekday: i32,
        #[case] nth: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(nth_weekday(&ChronoCalendar, &time, weekday, nth).unwrap(), expected);
    }

    #[test]
    fn test_nth_weekday_zero_is_day_before_month() {
        // The weekday is irrelevant, the previous month's last day comes back
        assert_eq!(nth_weekday(&ChronoCalendar, &at(2024, 3, 15), 5, 0).unwrap(), Some(29));
        assert_eq!(nth_weekday(&ChronoCalendar, &at(2024, 5, 15), 1, 0).unwrap(), Some(30));
        assert_eq!(nth_weekday(&ChronoCalendar, &at(2024, 1, 15), 3, 0).unwrap(), Some(31));
    }

    #[rstest]
    #[case(at(2024, 6, 5), 28)] // ends Sunday
    #[case(at(2024, 11, 5), 29)] // ends Saturday
    #[case(at(2024, 4, 5), 30)] // ends Tuesday
    fn test_last_weekday_of_month(#[case] time: NaiveDateTime, #[case] expected: i32) {
        assert_eq!(
            last_weekday_of_month(&ChronoCalendar, &time).unwrap(),
            Some(expected)
        );
    }

    #[rstest]
    #[case(at(2024, 6, 12), 12)] // Wednesday stays
    #[case(at(2024, 6, 15), 14)] // Saturday to Friday
    #[case(at(2024, 6, 16), 17)] // Sunday to Monday
    #[case(at(2024, 6, 1), 3)] // Saturday the 1st goes forward to Monday
    #[case(at(2024, 6, 30), 28)] // Sunday the 30th goes back to Friday
    #[case(at(2024, 9, 1), 2)] // Sunday the 1st
    fn test_next_weekday_to(#[case] time: NaiveDateTime, #[case] expected: i32) {
        assert_eq!(next_weekday_to(&ChronoCalendar, &time).unwrap(), expected);
    }
}
