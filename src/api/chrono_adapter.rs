use chrono::{NaiveDateTime, Weekday};
use tracing::{debug, trace};

use crate::core::{TimePoint, TimeUnit, calendar};
use crate::error::AdapterResult;

use super::formats::{self, DEFAULT_FORMATS};
use super::input_parser::parse_input;
use super::{AdapterOptions, DateAdapter, DateInput, FormatSpec};

pub const CHRONO_ADAPTER_ID: &str = "chrono";

/// [`DateAdapter`] that delegates every operation to chrono.
///
/// Calendar boundaries are computed on the wall clock of the configured
/// [`AdapterTimeZone`](super::AdapterTimeZone).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChronoDateAdapter {
    options: AdapterOptions,
}

impl ChronoDateAdapter {
    #[must_use]
    pub fn new(options: AdapterOptions) -> Self {
        Self { options }
    }

    /// Runs `op` on the wall-clock reading of `time`, returning `time`
    /// unchanged when either conversion leaves chrono's range.
    fn on_local<F>(&self, time: TimePoint, unit: TimeUnit, op: F) -> TimePoint
    where
        F: FnOnce(NaiveDateTime) -> Option<NaiveDateTime>,
    {
        let offset = self.options.offset();
        let result = time
            .to_local(offset)
            .ok()
            .and_then(op)
            .and_then(|local| TimePoint::from_local(local, offset));
        match result {
            Some(value) => value,
            None => {
                debug!(
                    time = time.millis(),
                    unit = unit.as_str(),
                    "calendar operation left the representable range; returning input"
                );
                time
            }
        }
    }
}

impl DateAdapter for ChronoDateAdapter {
    fn id(&self) -> &str {
        CHRONO_ADAPTER_ID
    }

    fn options(&self) -> &AdapterOptions {
        &self.options
    }

    fn formats(&self) -> &'static FormatSpec {
        &DEFAULT_FORMATS
    }

    fn parse(&self, value: Option<DateInput<'_>>, fmt: Option<&str>) -> Option<TimePoint> {
        parse_input(value?, fmt, &self.options)
    }

    fn format(&self, time: TimePoint, fmt: &str) -> AdapterResult<String> {
        let value = time.to_offset(self.options.offset())?;
        formats::render(&value, fmt, self.options.locale.chrono_locale())
    }

    fn add(&self, time: TimePoint, amount: i64, unit: TimeUnit) -> TimePoint {
        let Some(add) = calendar::add_fn(unit) else {
            trace!(unit = unit.as_str(), "add: unit has no addition; returning input");
            return time;
        };
        self.on_local(time, unit, |local| add(local, amount))
    }

    fn diff(&self, max: TimePoint, min: TimePoint, unit: TimeUnit) -> i64 {
        let Some(diff) = calendar::diff_fn(unit) else {
            trace!(unit = unit.as_str(), "diff: unit has no difference; returning 0");
            return 0;
        };
        let offset = self.options.offset();
        match (max.to_local(offset), min.to_local(offset)) {
            (Ok(max), Ok(min)) => diff(max, min),
            _ => {
                debug!(
                    max = max.millis(),
                    min = min.millis(),
                    "diff: operand outside the representable range; returning 0"
                );
                0
            }
        }
    }

    fn start_of(&self, time: TimePoint, unit: TimeUnit, weekday: Option<i64>) -> TimePoint {
        let Some(start_of) = calendar::start_of_fn(unit) else {
            trace!(unit = unit.as_str(), "start_of: unit has no start; returning input");
            return time;
        };
        let week_start = match unit {
            TimeUnit::IsoWeek => iso_week_start(weekday),
            _ => self.options.week_starts_on,
        };
        self.on_local(time, unit, |local| start_of(local, week_start))
    }

    fn end_of(&self, time: TimePoint, unit: TimeUnit) -> TimePoint {
        let Some(end_of) = calendar::end_of_fn(unit) else {
            trace!(unit = unit.as_str(), "end_of: unit has no end; returning input");
            return time;
        };
        let week_start = self.options.week_starts_on;
        self.on_local(time, unit, |local| end_of(local, week_start))
    }
}

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Week-start override for `isoWeek`: 0 = Sunday through 6 = Saturday,
/// reduced modulo 7. Absent means Monday.
fn iso_week_start(weekday: Option<i64>) -> Weekday {
    match weekday {
        Some(day) => WEEKDAYS_FROM_SUNDAY[day.rem_euclid(7) as usize],
        None => Weekday::Mon,
    }
}
