//! Date/time formatting, parsing and calendar-day comparisons.
//!
//! Patterns are chrono strftime patterns (`%Y-%m-%d`, `%A`, `%B`, ...).
//! Formatting uses the locale from [`DateConfig`] or the one passed in, so
//! `%A` renders as `Monday`, `lundi` or `Montag`. Parsing accepts the English
//! spellings of day and month names only.
//!
//! Anything that can fail (a malformed pattern, text that does not match,
//! arithmetic past chrono's range) goes through [`safe_operation`] and comes
//! back as `None`.

use std::fmt::{self, Write as _};

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{
    DateTime, Datelike, FixedOffset, Locale, Months, NaiveDate, NaiveTime, TimeZone, Utc,
};

use crate::config::DateConfig;
use crate::error::HelperError;
use crate::safe::{safe_operation_with, FaultReporter, LogFault};

/// Full weekday name, e.g. `Monday`.
pub const DAY_NAME_PATTERN: &str = "%A";
/// Full month name, e.g. `January`.
pub const MONTH_NAME_PATTERN: &str = "%B";

/// Render `date` with a strftime `pattern` in `locale`.
///
/// A malformed pattern surfaces as `fmt::Error` from chrono's formatter,
/// which is mapped to [`HelperError::Pattern`] instead of panicking the way
/// `to_string()` would.
pub(crate) fn render<Tz>(
    date: &DateTime<Tz>,
    pattern: &str,
    locale: Locale,
) -> Result<String, HelperError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", date.format_localized(pattern, locale))
        .map_err(|_| HelperError::pattern(pattern))?;
    Ok(out)
}

/// Parse `text` against `pattern`.
///
/// Patterns carrying an offset (`%z`) keep it. Otherwise the result is
/// placed in `offset`, and date-only patterns resolve to midnight.
fn parse_in(
    text: &str,
    pattern: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, HelperError> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(pattern))?;

    if let Ok(date) = parsed.to_datetime() {
        return Ok(date);
    }

    let time = time_of_day(&mut parsed)?;
    let offset = match parsed.offset() {
        Some(secs) => FixedOffset::east_opt(secs)
            .ok_or_else(|| HelperError::out_of_range(format!("offset of {secs}s")))?,
        None => offset,
    };
    let date = parsed.to_naive_date()?;
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| HelperError::out_of_range(format!("{text} at {offset}")))
}

/// Time of day from the parsed fields.
///
/// No time fields at all means midnight. Once an hour is present a missing
/// minute is 0 and a 12-hour clock without `%p` reads as AM. A minute or
/// second without an hour is an error.
fn time_of_day(parsed: &mut Parsed) -> Result<NaiveTime, HelperError> {
    let has_time = parsed.hour_mod_12().is_some()
        || parsed.minute().is_some()
        || parsed.second().is_some()
        || parsed.nanosecond().is_some();
    if !has_time {
        return Ok(NaiveTime::default());
    }

    if parsed.hour_mod_12().is_some() {
        if parsed.hour_div_12().is_none() {
            parsed.set_ampm(false)?;
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0)?;
        }
    }
    Ok(parsed.to_naive_time()?)
}

/// Format a Unix timestamp in milliseconds.
///
/// Returns `None` without reporting anything when `millis` is absent.
pub fn format_timestamp_millis(
    millis: Option<i64>,
    pattern: &str,
    config: &DateConfig,
) -> Option<String> {
    format_timestamp_millis_with(millis, pattern, config, LogFault)
}

/// Like [`format_timestamp_millis`], routing the fault to `reporter`.
pub fn format_timestamp_millis_with<R: FaultReporter>(
    millis: Option<i64>,
    pattern: &str,
    config: &DateConfig,
    reporter: R,
) -> Option<String> {
    let millis = millis?;
    safe_operation_with("format_timestamp_millis", reporter, || {
        let date = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| HelperError::out_of_range(format!("{millis} ms since epoch")))?
            .with_timezone(&config.offset);
        render(&date, pattern, config.locale)
    })
}

/// Format an instant in the configured zone and locale.
pub fn format_date(date: &DateTime<Utc>, pattern: &str, config: &DateConfig) -> Option<String> {
    format_date_with(date, pattern, config, LogFault)
}

/// Like [`format_date`], routing the fault to `reporter`.
pub fn format_date_with<R: FaultReporter>(
    date: &DateTime<Utc>,
    pattern: &str,
    config: &DateConfig,
    reporter: R,
) -> Option<String> {
    safe_operation_with("format_date", reporter, || {
        render(&date.with_timezone(&config.offset), pattern, config.locale)
    })
}

/// Parse `text` with `pattern`, resolving zone-less input in the configured
/// offset.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use funchelper::config::DateConfig;
/// use funchelper::datetime::parse_date;
///
/// let date = parse_date("2024-01-15", "%Y-%m-%d", &DateConfig::default()).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 15));
/// assert_eq!(date.hour(), 0);
///
/// let date = parse_date("2024-01-15 18", "%Y-%m-%d %H", &DateConfig::default()).unwrap();
/// assert_eq!((date.hour(), date.minute()), (18, 0));
///
/// assert!(parse_date("15th of never", "%Y-%m-%d", &DateConfig::default()).is_none());
/// ```
pub fn parse_date(text: &str, pattern: &str, config: &DateConfig) -> Option<DateTime<FixedOffset>> {
    parse_date_with(text, pattern, config, LogFault)
}

/// Like [`parse_date`], routing the fault to `reporter`.
pub fn parse_date_with<R: FaultReporter>(
    text: &str,
    pattern: &str,
    config: &DateConfig,
    reporter: R,
) -> Option<DateTime<FixedOffset>> {
    safe_operation_with("parse_date", reporter, || {
        parse_in(text, pattern, config.offset)
    })
}

/// Convert a date string from `input_pattern` to `output_pattern`.
///
/// Returns `None` without reporting anything when `date` is absent.
pub fn reformat_date(
    date: Option<&str>,
    input_pattern: &str,
    output_pattern: &str,
    config: &DateConfig,
) -> Option<String> {
    reformat_date_with(date, input_pattern, output_pattern, config, LogFault)
}

/// Like [`reformat_date`], routing the fault to `reporter`.
pub fn reformat_date_with<R: FaultReporter>(
    date: Option<&str>,
    input_pattern: &str,
    output_pattern: &str,
    config: &DateConfig,
    reporter: R,
) -> Option<String> {
    let text = date?;
    safe_operation_with("reformat_date", reporter, || {
        let parsed = parse_in(text, input_pattern, config.offset)?;
        render(&parsed, output_pattern, config.locale)
    })
}

/// Calendar days of both instants, evaluated in the zone of `first`.
fn calendar_days<Tz1, Tz2>(
    first: Option<&DateTime<Tz1>>,
    second: Option<&DateTime<Tz2>>,
) -> Option<(NaiveDate, NaiveDate)>
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let (first, second) = (first?, second?);
    let zone = first.timezone();
    Some((first.date_naive(), second.with_timezone(&zone).date_naive()))
}

/// Whether both instants fall on the same calendar day. `false` if either
/// is absent.
pub fn is_same_day<Tz1, Tz2>(first: Option<&DateTime<Tz1>>, second: Option<&DateTime<Tz2>>) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    calendar_days(first, second).is_some_and(|(a, b)| a == b)
}

/// Whether `second` falls on the calendar day after `first`. `false` if
/// either is absent.
pub fn is_next_day<Tz1, Tz2>(first: Option<&DateTime<Tz1>>, second: Option<&DateTime<Tz2>>) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    calendar_days(first, second).is_some_and(|(a, b)| a.succ_opt() == Some(b))
}

/// Whether `second` falls on the calendar day before `first`. `false` if
/// either is absent.
pub fn is_previous_day<Tz1, Tz2>(
    first: Option<&DateTime<Tz1>>,
    second: Option<&DateTime<Tz2>>,
) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    calendar_days(first, second).is_some_and(|(a, b)| a.pred_opt() == Some(b))
}

/// Calendar accessors on a zoned instant.
///
/// Fields are read in the instant's own zone; convert with
/// `with_timezone` first to evaluate them elsewhere. Every name and format
/// method has a `_with` form that routes its fault to a reporter.
pub trait DateTimeExt {
    /// 1 = Sunday, 2 = Monday, ..., 7 = Saturday.
    fn day_of_week_number(&self) -> u32;

    fn day_of_week_name(&self, pattern: &str, locale: Locale) -> Option<String> {
        self.day_of_week_name_with(pattern, locale, LogFault)
    }

    fn day_of_week_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String>;

    fn day_of_month(&self) -> u32;

    /// 1 = January ... 12 = December.
    fn month_of_year(&self) -> u32;

    fn month_name(&self, pattern: &str, locale: Locale) -> Option<String> {
        self.month_name_with(pattern, locale, LogFault)
    }

    fn month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String>;

    /// Day of month of the preceding calendar day.
    fn previous_day_of_month(&self) -> Option<u32>;

    /// Day of month of the following calendar day.
    fn next_day_of_month(&self) -> Option<u32>;

    fn previous_month(&self) -> u32;

    fn next_month(&self) -> u32;

    /// Name of the month one month earlier. The day of month is clamped, so
    /// 31 March steps back to February.
    fn previous_month_name(&self, pattern: &str, locale: Locale) -> Option<String> {
        self.previous_month_name_with(pattern, locale, LogFault)
    }

    fn previous_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String>;

    fn next_month_name(&self, pattern: &str, locale: Locale) -> Option<String> {
        self.next_month_name_with(pattern, locale, LogFault)
    }

    fn next_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String>;

    fn previous_year(&self) -> i32;

    fn next_year(&self) -> i32;

    fn to_formatted_string(&self, pattern: &str, locale: Locale) -> Option<String> {
        self.to_formatted_string_with(pattern, locale, LogFault)
    }

    fn to_formatted_string_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String>;
}

impl<Tz> DateTimeExt for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn day_of_week_number(&self) -> u32 {
        self.weekday().number_from_sunday()
    }

    fn day_of_week_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String> {
        safe_operation_with("day_of_week_name", reporter, || {
            render(self, pattern, locale)
        })
    }

    fn day_of_month(&self) -> u32 {
        self.day()
    }

    fn month_of_year(&self) -> u32 {
        self.month()
    }

    fn month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String> {
        safe_operation_with("month_name", reporter, || render(self, pattern, locale))
    }

    fn previous_day_of_month(&self) -> Option<u32> {
        self.date_naive().pred_opt().map(|d| d.day())
    }

    fn next_day_of_month(&self) -> Option<u32> {
        self.date_naive().succ_opt().map(|d| d.day())
    }

    fn previous_month(&self) -> u32 {
        match self.month() {
            1 => 12,
            m => m - 1,
        }
    }

    fn next_month(&self) -> u32 {
        self.month() % 12 + 1
    }

    fn previous_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String> {
        safe_operation_with("previous_month_name", reporter, || {
            let shifted = self
                .clone()
                .checked_sub_months(Months::new(1))
                .ok_or_else(|| HelperError::out_of_range("one month before date"))?;
            render(&shifted, pattern, locale)
        })
    }

    fn next_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String> {
        safe_operation_with("next_month_name", reporter, || {
            let shifted = self
                .clone()
                .checked_add_months(Months::new(1))
                .ok_or_else(|| HelperError::out_of_range("one month after date"))?;
            render(&shifted, pattern, locale)
        })
    }

    fn previous_year(&self) -> i32 {
        self.year() - 1
    }

    fn next_year(&self) -> i32 {
        self.year() + 1
    }

    fn to_formatted_string_with<R: FaultReporter>(
        &self,
        pattern: &str,
        locale: Locale,
        reporter: R,
    ) -> Option<String> {
        safe_operation_with("to_formatted_string", reporter, || {
            render(self, pattern, locale)
        })
    }
}
