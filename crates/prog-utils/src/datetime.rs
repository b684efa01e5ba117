//! Calendar helpers over `chrono` values.
//!
//! All arithmetic is done in naive (zone-free) time and every helper
//! returns a new value.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::DateTimeError;

const DAY_MS: i64 = 86_400_000;
const HALF_DAY_MS: i64 = 43_200_000;
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything [`truncate_time`] accepts as a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A naive date-time.
    DateTime(NaiveDateTime),
    /// A calendar date.
    Date(NaiveDate),
    /// Milliseconds since the Unix epoch, read as UTC.
    EpochMillis(i64),
    /// RFC 3339 text (normalised to UTC), `YYYY-MM-DDTHH:MM:SS[.fff]`, or
    /// `YYYY-MM-DD`.
    Text(String),
}

impl DateInput {
    fn resolve(self) -> Result<NaiveDateTime, DateTimeError> {
        match self {
            Self::DateTime(value) => Ok(value),
            Self::Date(value) => Ok(value.and_time(NaiveTime::MIN)),
            Self::EpochMillis(millis) => DateTime::from_timestamp_millis(millis)
                .map(|instant| instant.naive_utc())
                .ok_or(DateTimeError::OutOfRange),
            Self::Text(text) => parse_text(&text),
        }
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn parse_text(text: &str) -> Result<NaiveDateTime, DateTimeError> {
    let trimmed = text.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map(|day| day.and_time(NaiveTime::MIN))
        })
        .map_err(|err| {
            debug!(input = trimmed, error = %err, "text is not a recognised date");
            DateTimeError::Unparseable {
                input: trimmed.to_owned(),
            }
        })
}

/// Day of the week counted from Monday (0) to Sunday (6).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use prog_utils::datetime::day_of_week;
///
/// let monday = NaiveDate::from_ymd_opt(2021, 8, 16).expect("valid date");
/// assert_eq!(day_of_week(&monday), 0);
/// ```
#[must_use]
pub fn day_of_week<D: Datelike>(date: &D) -> u32 {
    date.weekday().num_days_from_monday()
}

/// The same wall-clock time `days` calendar days later (earlier when
/// negative).
///
/// # Errors
///
/// Returns [`DateTimeError::OutOfRange`] when the result is not
/// representable.
pub fn date_days_after(date: NaiveDateTime, days: i64) -> Result<NaiveDateTime, DateTimeError> {
    let span = Days::new(days.unsigned_abs());
    let shifted = if days.is_negative() {
        date.checked_sub_days(span)
    } else {
        date.checked_add_days(span)
    };
    shifted.ok_or(DateTimeError::OutOfRange)
}

/// The same wall-clock time `days` calendar days earlier (later when
/// negative).
///
/// # Errors
///
/// Returns [`DateTimeError::OutOfRange`] when the result is not
/// representable.
pub fn date_days_before(date: NaiveDateTime, days: i64) -> Result<NaiveDateTime, DateTimeError> {
    let forward = days.checked_neg().ok_or(DateTimeError::OutOfRange)?;
    date_days_after(date, forward)
}

/// Midnight at the start of the day described by `input`.
///
/// # Errors
///
/// Returns [`DateTimeError::Unparseable`] for unrecognised text and
/// [`DateTimeError::OutOfRange`] for epoch milliseconds chrono cannot
/// represent.
pub fn truncate_time(input: impl Into<DateInput>) -> Result<NaiveDateTime, DateTimeError> {
    let resolved = input.into().resolve()?;
    Ok(resolved.date().and_time(NaiveTime::MIN))
}

/// Whole days from `older` to `newer`, rounded to the nearest day with
/// halves rounded up.
///
/// The result is negative when `newer` precedes `older`.
#[must_use]
pub fn days_diff_between_dates(older: NaiveDateTime, newer: NaiveDateTime) -> i64 {
    let elapsed = newer.signed_duration_since(older).num_milliseconds();
    elapsed.saturating_add(HALF_DAY_MS).div_euclid(DAY_MS)
}

#[cfg(test)]
mod tests {
    //! Calendar arithmetic mirrors the behaviour of local wall-clock dates.

    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use chrono::Timelike;
    use rstest::{fixture, rstest};

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .expect("valid test date")
    }

    #[fixture]
    fn saturday() -> NaiveDateTime {
        at(2021, 8, 14, 13, 30, 15)
    }

    #[rstest]
    #[case(at(2021, 8, 14, 13, 30, 15), 5)]
    #[case(at(2021, 8, 16, 13, 30, 15), 0)]
    #[case(at(2021, 8, 8, 13, 30, 15), 6)]
    fn day_of_week_starts_on_monday(#[case] date: NaiveDateTime, #[case] expected: u32) {
        assert_eq!(day_of_week(&date), expected);
    }

    #[rstest]
    #[case(4, 8, 18)]
    #[case(1, 8, 15)]
    #[case(40, 9, 23)]
    #[case(-4, 8, 10)]
    #[case(-20, 7, 25)]
    #[case(0, 8, 14)]
    fn days_after_moves_calendar_date(
        saturday: NaiveDateTime,
        #[case] days: i64,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let shifted = date_days_after(saturday, days).expect("in range");
        assert_eq!((shifted.month(), shifted.day()), (month, day));
        assert_eq!(shifted.time(), saturday.time());
    }

    #[rstest]
    #[case(4, 8, 10)]
    #[case(1, 8, 13)]
    #[case(40, 7, 5)]
    #[case(-4, 8, 18)]
    #[case(-20, 9, 3)]
    #[case(0, 8, 14)]
    fn days_before_moves_calendar_date(
        saturday: NaiveDateTime,
        #[case] days: i64,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let shifted = date_days_before(saturday, days).expect("in range");
        assert_eq!((shifted.month(), shifted.day()), (month, day));
    }

    #[rstest]
    fn shifting_out_of_range_fails(saturday: NaiveDateTime) {
        assert_eq!(
            date_days_after(saturday, i64::MAX),
            Err(DateTimeError::OutOfRange)
        );
        assert_eq!(
            date_days_before(saturday, i64::MIN),
            Err(DateTimeError::OutOfRange)
        );
    }

    #[rstest]
    #[case::date_time(DateInput::from(at(2021, 8, 14, 13, 30, 15)))]
    #[case::date(DateInput::from(NaiveDate::from_ymd_opt(2021, 8, 14).expect("valid date")))]
    #[case::rfc3339(DateInput::from("2021-08-14T11:30:15.000Z"))]
    #[case::naive_text(DateInput::from("2021-08-14T11:30:15"))]
    #[case::date_text(DateInput::from(" 2021-08-14 "))]
    #[case::epoch_millis(DateInput::from(1_628_940_615_000_i64))]
    fn truncate_time_keeps_the_day(#[case] input: DateInput) {
        let truncated = truncate_time(input).expect("valid input");
        assert_eq!(
            (truncated.year(), truncated.month(), truncated.day()),
            (2021, 8, 14)
        );
        assert_eq!(
            (truncated.hour(), truncated.minute(), truncated.nanosecond()),
            (0, 0, 0)
        );
    }

    #[test]
    fn truncate_time_rejects_unknown_text() {
        assert_eq!(
            truncate_time("next tuesday"),
            Err(DateTimeError::Unparseable {
                input: "next tuesday".to_owned()
            })
        );
    }

    #[test]
    fn truncate_time_rejects_unrepresentable_millis() {
        assert_eq!(truncate_time(i64::MAX), Err(DateTimeError::OutOfRange));
    }

    #[rstest]
    fn days_diff_rounds_to_nearest_day(saturday: NaiveDateTime) {
        let later = at(2021, 8, 23, 11, 20, 34);
        assert_eq!(days_diff_between_dates(saturday, later), 9);
        assert_eq!(days_diff_between_dates(later, saturday), -9);
        assert_eq!(days_diff_between_dates(saturday, saturday), 0);
    }

    #[test]
    fn days_diff_rounds_halves_up() {
        let start = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(days_diff_between_dates(start, at(2021, 1, 1, 12, 0, 0)), 1);
        assert_eq!(days_diff_between_dates(at(2021, 1, 1, 12, 0, 0), start), 0);
    }
}
