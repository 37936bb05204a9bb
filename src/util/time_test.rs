use super::*;

// 2025-06-01T10:00:00 UTC
const BASE: i64 = 1_748_772_000;

#[test]
fn parse_epoch_seconds_handles_plain_local_date_time() {
    assert_eq!(parse_epoch_seconds("2025-06-01T10:00:00"), Some(BASE));
}

#[test]
fn parse_epoch_seconds_handles_zulu_and_fractional_seconds() {
    assert_eq!(parse_epoch_seconds("2025-06-01T10:00:00Z"), Some(BASE));
    assert_eq!(parse_epoch_seconds("2025-06-01T10:00:00.123"), Some(BASE));
}

#[test]
fn parse_epoch_seconds_matches_unix_epoch() {
    assert_eq!(parse_epoch_seconds("1970-01-01T00:00:00"), Some(0));
}

#[test]
fn parse_epoch_seconds_handles_leap_year_dates() {
    // 2024-02-29 is valid; one day after 2024-02-28.
    let feb28 = parse_epoch_seconds("2024-02-28T00:00:00").expect("valid date");
    let feb29 = parse_epoch_seconds("2024-02-29T00:00:00").expect("valid date");
    assert_eq!(feb29 - feb28, 86_400);
}

#[test]
fn parse_epoch_seconds_rejects_garbage() {
    assert!(parse_epoch_seconds("not a date").is_none());
    assert!(parse_epoch_seconds("2025-13-01T00:00:00").is_none());
    assert!(parse_epoch_seconds("2025-06-01T25:00:00").is_none());
}

#[test]
fn relative_label_buckets() {
    let ts = "2025-06-01T10:00:00";
    assert_eq!(relative_label(ts, BASE + 30), "just now");
    assert_eq!(relative_label(ts, BASE + 5 * 60), "5m ago");
    assert_eq!(relative_label(ts, BASE + 3 * 3600), "3h ago");
    assert_eq!(relative_label(ts, BASE + 2 * 86_400), "2d ago");
}

#[test]
fn relative_label_falls_back_to_date_after_a_month() {
    assert_eq!(relative_label("2025-06-01T10:00:00", BASE + 40 * 86_400), "2025-06-01");
}

#[test]
fn relative_label_passes_through_unparseable_input() {
    assert_eq!(relative_label("???", BASE), "???");
}

#[test]
fn clock_label_takes_hours_and_minutes() {
    assert_eq!(clock_label("2025-06-01T10:07:33"), "10:07");
    assert_eq!(clock_label("junk"), "junk");
}
