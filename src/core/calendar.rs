//! Calendar primitives over wall-clock (`NaiveDateTime`) values.
//!
//! Each function is a thin composition of chrono calls. The unit tables at the
//! bottom map a [`TimeUnit`] to the function that implements it; `None` marks
//! a unit the operation does not support, which callers turn into their
//! documented fallback value.

use chrono::{
    Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday,
};

use super::TimeUnit;

pub type AddFn = fn(NaiveDateTime, i64) -> Option<NaiveDateTime>;
pub type DiffFn = fn(NaiveDateTime, NaiveDateTime) -> i64;
pub type BoundaryFn = fn(NaiveDateTime, Weekday) -> Option<NaiveDateTime>;

fn add_delta(value: NaiveDateTime, delta: Option<TimeDelta>) -> Option<NaiveDateTime> {
    value.checked_add_signed(delta?)
}

pub fn add_milliseconds(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_delta(value, TimeDelta::try_milliseconds(amount))
}

pub fn add_seconds(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_delta(value, TimeDelta::try_seconds(amount))
}

pub fn add_minutes(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_delta(value, TimeDelta::try_minutes(amount))
}

pub fn add_hours(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_delta(value, TimeDelta::try_hours(amount))
}

pub fn add_days(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let days = Days::new(amount.unsigned_abs());
    if amount >= 0 {
        value.checked_add_days(days)
    } else {
        value.checked_sub_days(days)
    }
}

pub fn add_weeks(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_days(value, amount.checked_mul(7)?)
}

/// Adds calendar months, clamping the day to the end of shorter months
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount >= 0 {
        value.checked_add_months(months)
    } else {
        value.checked_sub_months(months)
    }
}

pub fn add_quarters(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_months(value, amount.checked_mul(3)?)
}

pub fn add_years(value: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    add_months(value, amount.checked_mul(12)?)
}

fn elapsed(max: NaiveDateTime, min: NaiveDateTime) -> TimeDelta {
    max.signed_duration_since(min)
}

pub fn difference_in_milliseconds(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    elapsed(max, min).num_milliseconds()
}

pub fn difference_in_seconds(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    elapsed(max, min).num_seconds()
}

pub fn difference_in_minutes(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    elapsed(max, min).num_minutes()
}

pub fn difference_in_hours(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    elapsed(max, min).num_hours()
}

pub fn difference_in_days(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    elapsed(max, min).num_days()
}

pub fn difference_in_weeks(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    elapsed(max, min).num_weeks()
}

/// Whole calendar months from `min` to `max`, truncated toward zero.
///
/// A trailing month only counts once `min` shifted by that many months does
/// not pass `max`.
pub fn difference_in_months(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    let months = i64::from(max.year() - min.year()) * 12 + i64::from(max.month())
        - i64::from(min.month());
    if months == 0 {
        return 0;
    }

    match add_months(min, months) {
        Some(anchor) if months > 0 && anchor > max => months - 1,
        Some(anchor) if months < 0 && anchor < max => months + 1,
        _ => months,
    }
}

pub fn difference_in_quarters(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    difference_in_months(max, min) / 3
}

/// Whole calendar years from `min` to `max`, truncated toward zero.
///
/// The trailing year counts once `max` reaches `min`'s month, day and time of
/// day. Feb 29 is compared as itself, so 2024-02-29 to 2025-02-28 is 0 years.
pub fn difference_in_years(max: NaiveDateTime, min: NaiveDateTime) -> i64 {
    let years = i64::from(max.year() - min.year());
    let within_year = |value: NaiveDateTime| (value.month(), value.day(), value.time());
    let short = match years.signum() {
        1 => within_year(max) < within_year(min),
        -1 => within_year(max) > within_year(min),
        _ => false,
    };
    if short { years - years.signum() } else { years }
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn start_of_second(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    value.with_nanosecond(0)
}

pub fn start_of_minute(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    value.date().and_hms_opt(value.hour(), value.minute(), 0)
}

pub fn start_of_hour(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    value.date().and_hms_opt(value.hour(), 0, 0)
}

pub fn start_of_day(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    Some(at_midnight(value.date()))
}

/// Midnight of the most recent `week_start` on or before `value`.
pub fn start_of_week(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    let day = value.weekday().num_days_from_sunday();
    let back = (day + 7 - week_start.num_days_from_sunday()) % 7;
    value
        .date()
        .checked_sub_days(Days::new(u64::from(back)))
        .map(at_midnight)
}

pub fn start_of_month(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    value.date().with_day(1).map(at_midnight)
}

pub fn start_of_quarter(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    let first_month = (value.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(value.year(), first_month, 1).map(at_midnight)
}

pub fn start_of_year(value: NaiveDateTime, _week_start: Weekday) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(value.year(), 1, 1).map(at_midnight)
}

/// Last millisecond of the `unit` period containing `value`.
fn end_of(value: NaiveDateTime, week_start: Weekday, unit: TimeUnit) -> Option<NaiveDateTime> {
    let (start_of, add) = (start_of_fn(unit)?, add_fn(unit)?);
    let next = add(start_of(value, week_start)?, 1)?;
    add_milliseconds(next, -1)
}

pub fn end_of_second(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Second)
}

pub fn end_of_minute(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Minute)
}

pub fn end_of_hour(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Hour)
}

pub fn end_of_day(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Day)
}

pub fn end_of_week(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Week)
}

pub fn end_of_month(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Month)
}

pub fn end_of_quarter(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Quarter)
}

pub fn end_of_year(value: NaiveDateTime, week_start: Weekday) -> Option<NaiveDateTime> {
    end_of(value, week_start, TimeUnit::Year)
}

#[must_use]
pub fn add_fn(unit: TimeUnit) -> Option<AddFn> {
    let f: AddFn = match unit {
        TimeUnit::Millisecond => add_milliseconds,
        TimeUnit::Second => add_seconds,
        TimeUnit::Minute => add_minutes,
        TimeUnit::Hour => add_hours,
        TimeUnit::Day => add_days,
        TimeUnit::Week => add_weeks,
        TimeUnit::Month => add_months,
        TimeUnit::Quarter => add_quarters,
        TimeUnit::Year => add_years,
        TimeUnit::IsoWeek => return None,
    };
    Some(f)
}

#[must_use]
pub fn diff_fn(unit: TimeUnit) -> Option<DiffFn> {
    let f: DiffFn = match unit {
        TimeUnit::Millisecond => difference_in_milliseconds,
        TimeUnit::Second => difference_in_seconds,
        TimeUnit::Minute => difference_in_minutes,
        TimeUnit::Hour => difference_in_hours,
        TimeUnit::Day => difference_in_days,
        TimeUnit::Week => difference_in_weeks,
        TimeUnit::Month => difference_in_months,
        TimeUnit::Quarter => difference_in_quarters,
        TimeUnit::Year => difference_in_years,
        TimeUnit::IsoWeek => return None,
    };
    Some(f)
}

/// `IsoWeek` shares the week implementation; callers pass the override day.
#[must_use]
pub fn start_of_fn(unit: TimeUnit) -> Option<BoundaryFn> {
    let f: BoundaryFn = match unit {
        TimeUnit::Second => start_of_second,
        TimeUnit::Minute => start_of_minute,
        TimeUnit::Hour => start_of_hour,
        TimeUnit::Day => start_of_day,
        TimeUnit::Week | TimeUnit::IsoWeek => start_of_week,
        TimeUnit::Month => start_of_month,
        TimeUnit::Quarter => start_of_quarter,
        TimeUnit::Year => start_of_year,
        TimeUnit::Millisecond => return None,
    };
    Some(f)
}

#[must_use]
pub fn end_of_fn(unit: TimeUnit) -> Option<BoundaryFn> {
    let f: BoundaryFn = match unit {
        TimeUnit::Second => end_of_second,
        TimeUnit::Minute => end_of_minute,
        TimeUnit::Hour => end_of_hour,
        TimeUnit::Day => end_of_day,
        TimeUnit::Week => end_of_week,
        TimeUnit::Month => end_of_month,
        TimeUnit::Quarter => end_of_quarter,
        TimeUnit::Year => end_of_year,
        TimeUnit::Millisecond | TimeUnit::IsoWeek => return None,
    };
    Some(f)
}
