use std::fmt::Write as _;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, Locale};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Display context a time-axis label is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayContext {
    Datetime,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl DisplayContext {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Datetime => "datetime",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl FromStr for DisplayContext {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DEFAULT_FORMATS
            .entries
            .iter()
            .map(|(context, _)| *context)
            .find(|context| context.as_str() == s)
            .ok_or_else(|| AdapterError::UnknownDisplayContext(s.to_owned()))
    }
}

/// Fixed mapping from display context to a chrono strftime pattern.
///
/// Patterns may use `%q` for the calendar quarter (1-4), which chrono lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    entries: &'static [(DisplayContext, &'static str)],
}

pub static DEFAULT_FORMATS: FormatSpec = FormatSpec {
    entries: &[
        (DisplayContext::Datetime, "%b %-d, %Y, %-I:%M:%S %p"),
        (DisplayContext::Millisecond, "%-I:%M:%S%.3f %p"),
        (DisplayContext::Second, "%-I:%M:%S %p"),
        (DisplayContext::Minute, "%-I:%M %p"),
        (DisplayContext::Hour, "%-I%p"),
        (DisplayContext::Day, "%b %-d"),
        (DisplayContext::Week, "%b %-d, %Y"),
        (DisplayContext::Month, "%b %Y"),
        (DisplayContext::Quarter, "Q%q - %Y"),
        (DisplayContext::Year, "%Y"),
    ],
};

impl FormatSpec {
    /// Pattern registered for `context`.
    #[must_use]
    pub fn get(&self, context: DisplayContext) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == context)
            .map(|(_, pattern)| *pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DisplayContext, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Context name to pattern, in declaration order.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<&'static str, &'static str> {
        self.iter()
            .map(|(context, pattern)| (context.as_str(), pattern))
            .collect()
    }

    pub fn to_json_pretty(&self) -> AdapterResult<String> {
        serde_json::to_string_pretty(&self.to_map()).map_err(|e| {
            AdapterError::InvalidData(format!("failed to serialize format spec: {e}"))
        })
    }
}

impl Serialize for FormatSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

/// Replaces `%q` with the quarter digit, leaving every other directive
/// (including `%%`) for chrono.
fn expand_quarter(pattern: &str, quarter: u32) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('q') => {
                let _ = write!(out, "{quarter}");
            }
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    out
}

/// Renders `value` with `pattern` in `locale`.
///
/// Patterns chrono rejects surface as [`AdapterError::InvalidFormatPattern`].
pub(crate) fn render(
    value: &DateTime<FixedOffset>,
    pattern: &str,
    locale: Locale,
) -> AdapterResult<String> {
    let invalid = || AdapterError::InvalidFormatPattern {
        pattern: pattern.to_owned(),
    };

    let expanded = expand_quarter(pattern, value.month0() / 3 + 1);
    if StrftimeItems::new(&expanded).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut out = String::new();
    write!(out, "{}", value.format_localized(&expanded, locale)).map_err(|_| invalid())?;
    Ok(out)
}
