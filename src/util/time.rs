//! Relative-time formatting for backend timestamps.
//!
//! The backend emits `LocalDateTime` strings without a zone suffix
//! (`2025-06-01T10:00:00`); callers pass "now" in epoch seconds so the
//! arithmetic stays pure and testable.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Epoch seconds parsed from a backend timestamp, treating it as UTC.
///
/// Handles `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds or a
/// trailing `Z`. Returns `None` for anything else rather than guessing.
#[must_use]
pub fn parse_epoch_seconds(timestamp: &str) -> Option<i64> {
    let trimmed = timestamp.strip_suffix('Z').unwrap_or(timestamp);
    let (date, time) = trimmed.split_once('T')?;

    let mut date_parts = date.split('-');
    let year: i64 = date_parts.next()?.parse().ok()?;
    let month: i64 = date_parts.next()?.parse().ok()?;
    let day: i64 = date_parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let time = time.split('.').next()?;
    let mut time_parts = time.split(':');
    let hour: i64 = time_parts.next()?.parse().ok()?;
    let minute: i64 = time_parts.next()?.parse().ok()?;
    let second: i64 = time_parts.next().unwrap_or("0").parse().ok()?;
    if hour > 23 || minute > 59 || second > 60 {
        return None;
    }

    Some(days_from_civil(year, month, day) * DAY + hour * HOUR + minute * MINUTE + second)
}

/// Days since the Unix epoch for a civil date (Howard Hinnant's algorithm).
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Human "how long ago" label for a backend timestamp.
///
/// Falls back to the date portion for anything older than 30 days and to the
/// raw string when the timestamp cannot be parsed.
#[must_use]
pub fn relative_label(timestamp: &str, now_epoch_seconds: i64) -> String {
    let Some(then) = parse_epoch_seconds(timestamp) else {
        return timestamp.to_owned();
    };
    let diff = now_epoch_seconds - then;

    if diff < MINUTE {
        return "just now".to_owned();
    }
    if diff < HOUR {
        return format!("{}m ago", diff / MINUTE);
    }
    if diff < DAY {
        return format!("{}h ago", diff / HOUR);
    }
    if diff < 30 * DAY {
        return format!("{}d ago", diff / DAY);
    }
    timestamp.split('T').next().unwrap_or(timestamp).to_owned()
}

/// `HH:MM` portion of a backend timestamp, for chat bubbles.
#[must_use]
pub fn clock_label(timestamp: &str) -> String {
    timestamp
        .split('T')
        .nth(1)
        .and_then(|time| time.get(..5))
        .map_or_else(|| timestamp.to_owned(), str::to_owned)
}

/// Current wall-clock time in epoch seconds. Zero on the server, where
/// relative labels are never rendered.
#[must_use]
pub fn now_epoch_seconds() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
