use chrono::{TimeZone, Utc};

use chart_date_adapter::api::{AdapterOptions, AdapterTimeZone, ChronoDateAdapter, DateInput};
use chart_date_adapter::{DateAdapter, TimePoint};

fn utc_millis(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("valid utc datetime")
        .timestamp_millis()
}

fn adapter_with_reference(reference: i64) -> ChronoDateAdapter {
    ChronoDateAdapter::new(
        AdapterOptions::default().with_parse_reference(TimePoint::from_millis(reference)),
    )
}

#[test]
fn absent_value_parses_to_none() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(adapter.parse(None, None), None);
    assert_eq!(adapter.parse(None, Some("%Y-%m-%d")), None);
}

#[test]
fn numeric_timestamps_round_trip_unchanged() {
    let adapter = ChronoDateAdapter::default();
    for millis in [0_i64, 1, -1, 1_686_823_200_000, -62_135_596_800_000] {
        assert_eq!(
            adapter.parse(Some(DateInput::Millis(millis)), None),
            Some(TimePoint::from_millis(millis))
        );
    }
}

#[test]
fn fractional_numbers_truncate_and_non_finite_numbers_are_invalid() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some(DateInput::Number(1_000.75)), None),
        Some(TimePoint::from_millis(1_000))
    );
    assert_eq!(adapter.parse(Some(DateInput::Number(f64::NAN)), None), None);
    assert_eq!(
        adapter.parse(Some(DateInput::Number(f64::NEG_INFINITY)), None),
        None
    );
}

#[test]
fn timestamps_outside_calendar_range_are_invalid() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(adapter.parse(Some(DateInput::Millis(i64::MAX)), None), None);
}

#[test]
fn native_datetime_converts_directly() {
    let adapter = ChronoDateAdapter::default();
    let value = Utc
        .with_ymd_and_hms(2023, 6, 15, 10, 0, 0)
        .single()
        .expect("valid ts");
    assert_eq!(
        adapter.parse(Some(value.into()), None),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
}

#[test]
fn iso_string_with_zulu_offset_parses_to_epoch_millis() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("2023-06-15T10:00:00.000Z".into()), None),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
}

#[test]
fn iso_string_with_explicit_offset_is_honoured() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("2023-06-15T12:00:00+02:00".into()), None),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
    assert_eq!(
        adapter.parse(Some("2023-06-15T12:00+02:00".into()), None),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
}

#[test]
fn iso_local_forms_read_in_configured_timezone() {
    let adapter = ChronoDateAdapter::new(
        AdapterOptions::default()
            .with_timezone(AdapterTimeZone::FixedOffsetMinutes { minutes: 120 }),
    );
    assert_eq!(
        adapter.parse(Some("2023-06-15T12:00:00".into()), None),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
    assert_eq!(
        adapter.parse(Some("2023-06-15".into()), None),
        Some(TimePoint::from_millis(utc_millis(2023, 6, 14, 22, 0, 0)))
    );
}

#[test]
fn iso_reduced_precision_forms_resolve_to_period_start() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("2023-06".into()), None),
        Some(TimePoint::from_millis(utc_millis(2023, 6, 1, 0, 0, 0)))
    );
    assert_eq!(
        adapter.parse(Some("2023".into()), None),
        Some(TimePoint::from_millis(utc_millis(2023, 1, 1, 0, 0, 0)))
    );
    assert_eq!(
        adapter.parse(Some("2023-06-15 08:30".into()), None),
        Some(TimePoint::from_millis(utc_millis(2023, 6, 15, 8, 30, 0)))
    );
}

#[test]
fn malformed_strings_parse_to_none() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(adapter.parse(Some("not-a-date".into()), None), None);
    assert_eq!(adapter.parse(Some("".into()), None), None);
    assert_eq!(adapter.parse(Some("2023-02-30".into()), None), None);
    assert_eq!(adapter.parse(Some("2023-13".into()), None), None);
}

#[test]
fn explicit_pattern_parses_full_datetime() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("15/06/2023 10:00".into()), Some("%d/%m/%Y %H:%M")),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
}

#[test]
fn explicit_pattern_date_only_resolves_to_midnight() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("15.06.2023".into()), Some("%d.%m.%Y")),
        Some(TimePoint::from_millis(utc_millis(2023, 6, 15, 0, 0, 0)))
    );
}

#[test]
fn explicit_pattern_time_only_takes_reference_date() {
    let adapter = adapter_with_reference(utc_millis(2021, 3, 4, 17, 0, 0));
    assert_eq!(
        adapter.parse(Some("10:30".into()), Some("%H:%M")),
        Some(TimePoint::from_millis(utc_millis(2021, 3, 4, 10, 30, 0)))
    );
}

#[test]
fn explicit_pattern_without_year_takes_reference_year() {
    let adapter = adapter_with_reference(utc_millis(2021, 3, 4, 17, 0, 0));
    assert_eq!(
        adapter.parse(Some("Jun 15".into()), Some("%b %d")),
        Some(TimePoint::from_millis(utc_millis(2021, 6, 15, 0, 0, 0)))
    );
}

#[test]
fn explicit_pattern_mismatch_parses_to_none() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("2023-06-15".into()), Some("%d/%m/%Y")),
        None
    );
}

#[test]
fn explicit_pattern_ignores_iso_fallback() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("2023-06-15T10:00:00.000Z".into()), Some("%Y")),
        None
    );
}

#[test]
fn explicit_pattern_hour_without_minutes_keeps_the_hour() {
    let adapter = ChronoDateAdapter::default();
    assert_eq!(
        adapter.parse(Some("2023-06-15 10".into()), Some("%Y-%m-%d %H")),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );

    let adapter = adapter_with_reference(utc_millis(2026, 10, 19, 8, 0, 0));
    assert_eq!(
        adapter.parse(Some("15/06 10 PM".into()), Some("%d/%m %I %p")),
        Some(TimePoint::from_millis(utc_millis(2026, 6, 15, 22, 0, 0)))
    );
    assert_eq!(
        adapter.parse(Some("15/06 10".into()), Some("%d/%m %I")),
        Some(TimePoint::from_millis(utc_millis(2026, 6, 15, 10, 0, 0)))
    );
}

#[test]
fn explicit_pattern_coarse_fields_resolve_to_period_start() {
    let adapter = adapter_with_reference(utc_millis(2026, 10, 19, 8, 0, 0));
    assert_eq!(
        adapter.parse(Some("2023".into()), Some("%Y")),
        Some(TimePoint::from_millis(1_672_531_200_000))
    );
    assert_eq!(
        adapter.parse(Some("2023-06".into()), Some("%Y-%m")),
        Some(TimePoint::from_millis(1_685_577_600_000))
    );
    assert_eq!(
        adapter.parse(Some("06".into()), Some("%m")),
        Some(TimePoint::from_millis(utc_millis(2026, 6, 1, 0, 0, 0)))
    );
}

#[test]
fn explicit_pattern_day_only_takes_reference_month() {
    let adapter = adapter_with_reference(utc_millis(2026, 10, 19, 8, 0, 0));
    assert_eq!(
        adapter.parse(Some("15".into()), Some("%d")),
        Some(TimePoint::from_millis(utc_millis(2026, 10, 15, 0, 0, 0)))
    );
    assert_eq!(
        adapter.parse(Some("31".into()), Some("%d")),
        Some(TimePoint::from_millis(utc_millis(2026, 10, 31, 0, 0, 0)))
    );
}

#[test]
fn explicit_pattern_with_offset_and_ordinal() {
    let adapter = adapter_with_reference(utc_millis(2021, 3, 4, 17, 0, 0));
    assert_eq!(
        adapter.parse(Some("2023-06-15 12 +0200".into()), Some("%Y-%m-%d %H %z")),
        Some(TimePoint::from_millis(1_686_823_200_000))
    );
    assert_eq!(
        adapter.parse(Some("166".into()), Some("%j")),
        Some(TimePoint::from_millis(utc_millis(2021, 6, 15, 0, 0, 0)))
    );
}
