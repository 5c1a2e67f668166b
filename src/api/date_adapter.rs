use chrono::{DateTime, Utc};

use crate::core::{TimePoint, TimeUnit};
use crate::error::AdapterResult;

use super::{AdapterOptions, FormatSpec};

/// Raw value handed to [`DateAdapter::parse`] by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Host numeric value in milliseconds; fractional parts truncate toward zero.
    Number(f64),
    DateTime(DateTime<Utc>),
    Text(&'a str),
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        Self::Millis(value)
    }
}

impl From<f64> for DateInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<TimePoint> for DateInput<'_> {
    fn from(value: TimePoint) -> Self {
        Self::Millis(value.millis())
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Date capability set a chart host expects from its time-axis adapter.
///
/// Implementations never fail on bad calendar input: unparseable values become
/// `None` and unsupported units fall back to the input value (or zero for
/// `diff`). Only formatting reports errors.
pub trait DateAdapter: Send + Sync {
    /// Registration id the host looks the adapter up by.
    fn id(&self) -> &str;

    fn options(&self) -> &AdapterOptions;

    fn formats(&self) -> &'static FormatSpec;

    fn parse(&self, value: Option<DateInput<'_>>, fmt: Option<&str>) -> Option<TimePoint>;

    fn format(&self, time: TimePoint, fmt: &str) -> AdapterResult<String>;

    fn add(&self, time: TimePoint, amount: i64, unit: TimeUnit) -> TimePoint;

    fn diff(&self, max: TimePoint, min: TimePoint, unit: TimeUnit) -> i64;

    /// `weekday` only applies to [`TimeUnit::IsoWeek`] (0 = Sunday).
    fn start_of(&self, time: TimePoint, unit: TimeUnit, weekday: Option<i64>) -> TimePoint;

    fn end_of(&self, time: TimePoint, unit: TimeUnit) -> TimePoint;
}
