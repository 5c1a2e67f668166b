use std::sync::Arc;

use chart_date_adapter::api::{AdapterRegistry, ChronoDateAdapter, DisplayContext};
use chart_date_adapter::{HostDateAdapter, TimePoint};

// 2023-06-15T10:00:00.000Z, a Thursday.
const SAMPLE: TimePoint = TimePoint::from_millis(1_686_823_200_000);
const DAY_MS: i64 = 86_400_000;

fn host() -> HostDateAdapter {
    HostDateAdapter::new(Arc::new(ChronoDateAdapter::default()))
}

#[test]
fn recognized_unit_names_dispatch_to_adapter() {
    let host = host();

    assert_eq!(host.add(SAMPLE, 2, "day").millis(), SAMPLE.millis() + 2 * DAY_MS);
    assert_eq!(
        host.diff(TimePoint::from_millis(SAMPLE.millis() + 3 * DAY_MS), SAMPLE, "day"),
        3
    );
    assert_eq!(
        host.start_of(SAMPLE, "isoWeek", Some(1)).millis(),
        SAMPLE.millis() - 3 * DAY_MS - 10 * 3_600_000
    );
    assert_eq!(
        host.end_of(SAMPLE, "hour").millis(),
        SAMPLE.millis() + 3_600_000 - 1
    );
}

#[test]
fn unrecognized_unit_names_fall_back() {
    let host = host();
    let other = TimePoint::from_millis(SAMPLE.millis() + 40 * DAY_MS);

    assert_eq!(host.add(SAMPLE, 5, "unsupported-unit"), SAMPLE);
    assert_eq!(host.diff(other, SAMPLE, "unsupported-unit"), 0);
    assert_eq!(host.start_of(SAMPLE, "fortnight", None), SAMPLE);
    assert_eq!(host.end_of(SAMPLE, "fortnight"), SAMPLE);
}

#[test]
fn unit_names_are_matched_exactly() {
    let host = host();
    assert_eq!(host.add(SAMPLE, 1, "Day"), SAMPLE);
    assert_eq!(host.start_of(SAMPLE, "isoweek", Some(1)), SAMPLE);
}

#[test]
fn supported_names_without_implementation_fall_back() {
    let host = host();
    assert_eq!(host.add(SAMPLE, 5, "isoWeek"), SAMPLE);
    assert_eq!(host.diff(SAMPLE, TimePoint::EPOCH, "isoWeek"), 0);
    assert_eq!(host.start_of(SAMPLE, "millisecond", None), SAMPLE);
    assert_eq!(host.end_of(SAMPLE, "millisecond"), SAMPLE);
}

#[test]
fn format_context_uses_built_in_pattern() {
    let host = host();
    assert_eq!(
        host.format_context(SAMPLE, DisplayContext::Quarter)
            .expect("format"),
        "Q2 - 2023"
    );
    assert_eq!(
        host.format_context(SAMPLE, DisplayContext::Day)
            .expect("format"),
        host.format(SAMPLE, "%b %-d").expect("format")
    );
}

#[test]
fn host_resolves_active_adapter_from_registry() {
    let registry = AdapterRegistry::with_default();
    let host = HostDateAdapter::from_registry(&registry).expect("active adapter");
    assert_eq!(host.id(), "chrono");
    assert_eq!(
        host.parse(Some(SAMPLE.into()), None),
        Some(SAMPLE)
    );

    let empty = AdapterRegistry::new();
    assert!(HostDateAdapter::from_registry(&empty).is_err());
}
