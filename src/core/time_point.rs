use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Millisecond-resolution instant relative to the Unix epoch.
///
/// This is the only time representation that crosses the adapter boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimePoint(i64);

impl TimePoint {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self(value.timestamp_millis())
    }

    /// Converts to a UTC datetime, `None` when chrono cannot represent the instant.
    #[must_use]
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }

    pub fn to_offset(self, offset: FixedOffset) -> AdapterResult<DateTime<FixedOffset>> {
        self.to_utc()
            .map(|utc| utc.with_timezone(&offset))
            .ok_or(AdapterError::OutOfRange { millis: self.0 })
    }

    /// Wall-clock reading of this instant at `offset`.
    pub fn to_local(self, offset: FixedOffset) -> AdapterResult<NaiveDateTime> {
        Ok(self.to_offset(offset)?.naive_local())
    }

    /// Instant at which the wall clock at `offset` reads `local`.
    #[must_use]
    pub fn from_local(local: NaiveDateTime, offset: FixedOffset) -> Option<Self> {
        offset
            .from_local_datetime(&local)
            .single()
            .map(|value| Self::from_datetime(&value))
    }
}

impl From<i64> for TimePoint {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<TimePoint> for i64 {
    fn from(value: TimePoint) -> Self {
        value.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimePoint {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from_datetime(&value)
    }
}
