use chrono::{FixedOffset, Locale, Offset, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::TimePoint;

/// Locale preset forwarded to chrono's localized formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateLocale {
    #[default]
    EnUs,
    EsEs,
    DeDe,
    FrFr,
    PtBr,
}

impl DateLocale {
    #[must_use]
    pub(crate) fn chrono_locale(self) -> Locale {
        match self {
            Self::EnUs => Locale::en_US,
            Self::EsEs => Locale::es_ES,
            Self::DeDe => Locale::de_DE,
            Self::FrFr => Locale::fr_FR,
            Self::PtBr => Locale::pt_BR,
        }
    }
}

/// Time reference in which calendar boundaries are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AdapterTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl AdapterTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    /// Out-of-range offsets (beyond +/-24h) collapse to UTC.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

/// Adapter-scoped configuration, bound once at construction and forwarded to
/// every delegated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterOptions {
    pub locale: DateLocale,
    /// First day of the week used by the `week` unit.
    pub week_starts_on: Weekday,
    pub timezone: AdapterTimeZone,
    /// Base date for fields a parse pattern leaves unspecified. `None` reads
    /// the system clock at parse time.
    pub parse_reference: Option<TimePoint>,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            locale: DateLocale::default(),
            week_starts_on: Weekday::Sun,
            timezone: AdapterTimeZone::default(),
            parse_reference: None,
        }
    }
}

impl AdapterOptions {
    #[must_use]
    pub fn with_locale(mut self, locale: DateLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_week_starts_on(mut self, week_starts_on: Weekday) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: AdapterTimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_parse_reference(mut self, reference: TimePoint) -> Self {
        self.parse_reference = Some(reference);
        self
    }

    #[must_use]
    pub(crate) fn offset(&self) -> FixedOffset {
        self.timezone.fixed_offset()
    }
}
