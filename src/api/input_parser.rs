use chrono::format::{self, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use crate::core::TimePoint;

use super::{AdapterOptions, DateInput};

const ISO_OFFSET_PATTERNS: [&str; 3] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

const ISO_LOCAL_DATETIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const ISO_DATE_PATTERNS: [&str; 2] = ["%Y-%m-%d", "%G-W%V-%u"];

pub(super) fn parse_input(
    value: DateInput<'_>,
    fmt: Option<&str>,
    options: &AdapterOptions,
) -> Option<TimePoint> {
    let parsed = match value {
        DateInput::Millis(millis) => Some(TimePoint::from_millis(millis)),
        DateInput::Number(number) => number_to_millis(number).map(TimePoint::from_millis),
        DateInput::DateTime(value) => Some(TimePoint::from_datetime(&value)),
        DateInput::Text(text) => match fmt {
            Some(pattern) => parse_with_pattern(text, pattern, options),
            None => parse_iso(text, options),
        },
    };

    let valid = parsed.filter(|time| time.to_utc().is_some());
    if valid.is_none() {
        debug!(?value, ?fmt, "date input did not resolve to a valid time point");
    }
    valid
}

fn number_to_millis(number: f64) -> Option<i64> {
    if !number.is_finite() {
        return None;
    }
    let truncated = number.trunc();
    if truncated > (i64::MAX as f64) || truncated < (i64::MIN as f64) {
        return None;
    }
    Some(truncated as i64)
}

fn from_local(local: NaiveDateTime, options: &AdapterOptions) -> Option<TimePoint> {
    TimePoint::from_local(local, options.offset())
}

fn at_midnight(date: NaiveDate, options: &AdapterOptions) -> Option<TimePoint> {
    from_local(date.and_time(NaiveTime::MIN), options)
}

/// Date used to fill fields a pattern does not specify, read in the adapter's
/// time reference.
fn reference_date(options: &AdapterOptions) -> Option<NaiveDate> {
    let reference = match options.parse_reference {
        Some(reference) => reference,
        None => TimePoint::from_datetime(&Utc::now()),
    };
    reference
        .to_local(options.offset())
        .ok()
        .map(|local| local.date())
}

/// Parses `text` against an exact strftime `pattern`.
///
/// An offset in the text wins over the configured time reference. Fields the
/// pattern leaves out are filled before resolving: a missing year comes from
/// the reference date, a missing month or day is the first of the period when
/// a coarser field was given and the reference date's otherwise, and missing
/// time fields are zero.
pub(super) fn parse_with_pattern(
    text: &str,
    pattern: &str,
    options: &AdapterOptions,
) -> Option<TimePoint> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(pattern)).ok()?;

    if parsed.timestamp().is_some() {
        return match parsed.offset() {
            Some(_) => parsed.to_datetime().ok().map(|value| TimePoint::from_datetime(&value)),
            None => parsed
                .to_naive_datetime_with_offset(0)
                .ok()
                .map(|value| TimePoint::from_datetime(&value.and_utc())),
        };
    }

    fill_date(&mut parsed, options)?;
    fill_time(&mut parsed).ok()?;

    if parsed.offset().is_some() {
        return parsed
            .to_datetime()
            .ok()
            .map(|value| TimePoint::from_datetime(&value));
    }
    let local = parsed.to_naive_datetime_with_offset(0).ok()?;
    from_local(local, options)
}

/// Completes a calendar date. Ordinal and week-based patterns resolve on their
/// own and only borrow the reference year.
fn fill_date(parsed: &mut Parsed, options: &AdapterOptions) -> Option<()> {
    let has_isoyear = parsed.isoyear().is_some()
        || parsed.isoyear_div_100().is_some()
        || parsed.isoyear_mod_100().is_some();
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some();
    let calendar_date = parsed.ordinal().is_none()
        && parsed.week_from_sun().is_none()
        && parsed.week_from_mon().is_none()
        && parsed.isoweek().is_none();

    let reference = if has_year || has_isoyear {
        None
    } else {
        let reference = reference_date(options)?;
        parsed.set_year(i64::from(reference.year())).ok()?;
        Some(reference)
    };
    if !calendar_date {
        return Some(());
    }

    let has_month = parsed.month().is_some();
    if !has_month {
        let month = reference.map_or(1, |date| date.month());
        parsed.set_month(i64::from(month)).ok()?;
    }
    if parsed.day().is_none() {
        let day = match reference {
            Some(date) if !has_month => date.day(),
            _ => 1,
        };
        parsed.set_day(i64::from(day)).ok()?;
    }
    Some(())
}

/// Zeroes the time fields the pattern left out. A bare 12-hour clock reads as
/// AM and a bare AM/PM marker as the start of that half-day.
fn fill_time(parsed: &mut Parsed) -> ParseResult<()> {
    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (Some(_), None) => parsed.set_hour12(12)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }
    Ok(())
}

/// Parses the ISO-8601 forms a chart host feeds in. Forms without an offset
/// are read in the configured time reference.
pub(super) fn parse_iso(text: &str, options: &AdapterOptions) -> Option<TimePoint> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(TimePoint::from_datetime(&value));
    }
    if let Some(utc_text) = text.strip_suffix(['Z', 'z']) {
        return ISO_LOCAL_DATETIME_PATTERNS
            .iter()
            .find_map(|pattern| NaiveDateTime::parse_from_str(utc_text, pattern).ok())
            .map(|local| TimePoint::from_datetime(&local.and_utc()));
    }
    if let Some(value) = ISO_OFFSET_PATTERNS
        .iter()
        .find_map(|pattern| DateTime::parse_from_str(text, pattern).ok())
    {
        return Some(TimePoint::from_datetime(&value));
    }
    if let Some(local) = ISO_LOCAL_DATETIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
    {
        return from_local(local, options);
    }

    ISO_DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(text, pattern).ok())
        .or_else(|| parse_short_date(text))
        .and_then(|date| at_midnight(date, options))
}

/// `YYYY`, `YYYY-MM` and ordinal `YYYY-DDD`, told apart by shape so that
/// "2023-06" is never read as an ordinal day.
fn parse_short_date(text: &str) -> Option<NaiveDate> {
    match text.split_once('-') {
        Some((year, month)) if year.len() == 4 && month.len() == 2 => {
            NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()
        }
        Some((year, day)) if year.len() == 4 && day.len() == 3 => {
            NaiveDate::parse_from_str(text, "%Y-%j").ok()
        }
        None if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
        }
        _ => None,
    }
}
