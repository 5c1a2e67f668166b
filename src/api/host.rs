use std::sync::Arc;

use tracing::trace;

use crate::core::{TimePoint, TimeUnit};
use crate::error::{AdapterError, AdapterResult};

use super::{AdapterRegistry, DateAdapter, DateInput, DisplayContext, FormatSpec};

/// Facade for hosts that pass units as free-form strings.
///
/// Unit names are matched exactly (`"isoWeek"`, not `"isoweek"`). Names that
/// match no [`TimeUnit`] get the same fallbacks as unsupported units: the
/// input time for `add`/`start_of`/`end_of` and zero for `diff`.
#[derive(Clone)]
pub struct HostDateAdapter {
    adapter: Arc<dyn DateAdapter>,
}

impl HostDateAdapter {
    #[must_use]
    pub fn new(adapter: Arc<dyn DateAdapter>) -> Self {
        Self { adapter }
    }

    /// Wraps the registry's active adapter.
    pub fn from_registry(registry: &AdapterRegistry) -> AdapterResult<Self> {
        registry
            .active()
            .map(Self::new)
            .ok_or_else(|| AdapterError::InvalidData("no active date adapter".to_owned()))
    }

    #[must_use]
    pub fn adapter(&self) -> &Arc<dyn DateAdapter> {
        &self.adapter
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.adapter.id()
    }

    #[must_use]
    pub fn formats(&self) -> &'static FormatSpec {
        self.adapter.formats()
    }

    #[must_use]
    pub fn parse(&self, value: Option<DateInput<'_>>, fmt: Option<&str>) -> Option<TimePoint> {
        self.adapter.parse(value, fmt)
    }

    pub fn format(&self, time: TimePoint, fmt: &str) -> AdapterResult<String> {
        self.adapter.format(time, fmt)
    }

    /// Renders `time` with the built-in pattern for `context`.
    pub fn format_context(
        &self,
        time: TimePoint,
        context: DisplayContext,
    ) -> AdapterResult<String> {
        let pattern = self
            .formats()
            .get(context)
            .ok_or_else(|| AdapterError::UnknownDisplayContext(context.as_str().to_owned()))?;
        self.adapter.format(time, pattern)
    }

    #[must_use]
    pub fn add(&self, time: TimePoint, amount: i64, unit: &str) -> TimePoint {
        match resolve_unit("add", unit) {
            Some(unit) => self.adapter.add(time, amount, unit),
            None => time,
        }
    }

    #[must_use]
    pub fn diff(&self, max: TimePoint, min: TimePoint, unit: &str) -> i64 {
        match resolve_unit("diff", unit) {
            Some(unit) => self.adapter.diff(max, min, unit),
            None => 0,
        }
    }

    #[must_use]
    pub fn start_of(&self, time: TimePoint, unit: &str, weekday: Option<i64>) -> TimePoint {
        match resolve_unit("start_of", unit) {
            Some(unit) => self.adapter.start_of(time, unit, weekday),
            None => time,
        }
    }

    #[must_use]
    pub fn end_of(&self, time: TimePoint, unit: &str) -> TimePoint {
        match resolve_unit("end_of", unit) {
            Some(unit) => self.adapter.end_of(time, unit),
            None => time,
        }
    }
}

fn resolve_unit(operation: &'static str, name: &str) -> Option<TimeUnit> {
    let unit = TimeUnit::from_name(name);
    if unit.is_none() {
        trace!(operation, unit = name, "unrecognized unit name; applying fallback");
    }
    unit
}
