//! Item Dates
//!
//! Lenient ISO-8601 parsing. Anything we cannot read sorts as the oldest
//! possible time instead of failing. Also formats the voting countdown.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder the API sends for dates it does not know
pub const UNKNOWN_DATE: &str = "Unknown";

/// Timestamp (ms since epoch) used on the sort axis for missing/invalid dates
pub const INVALID_TIMESTAMP: i64 = i64::MIN;

/// Parse an ISO-8601 string into milliseconds since the epoch
///
/// Accepts RFC 3339 (`2024-01-01T10:00:00Z`), naive date-times
/// (`2024-01-01T10:00:00`, optionally with fractional seconds) and plain
/// dates (`2024-01-01`, read as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == UNKNOWN_DATE {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Sort key for an optional date, invalid dates collapse to `INVALID_TIMESTAMP`
pub fn sort_key(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp).unwrap_or(INVALID_TIMESTAMP)
}

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Long Spanish date, e.g. "1 de enero de 2024"
pub fn format_long_es(raw: Option<&str>) -> Option<String> {
    use chrono::Datelike;

    let millis = raw.and_then(parse_timestamp)?;
    let dt = DateTime::from_timestamp_millis(millis)?;
    let month = MONTHS_ES[dt.month0() as usize];
    Some(format!("{} de {} de {}", dt.day(), month, dt.year()))
}

/// Shown once the deadline has passed
pub const FINISHED: &str = "Finalizado";

/// Time left from `now_ms` until `end`, e.g. "2 d 03 h 15 min 07 s"
///
/// `None` when `end` is unreadable; whole seconds, rounded down.
pub fn format_remaining(now_ms: i64, end: Option<&str>) -> Option<String> {
    let end_ms = end.and_then(parse_timestamp)?;
    let left = end_ms.saturating_sub(now_ms) / 1000;
    if left <= 0 {
        return Some(FINISHED.to_string());
    }

    let (days, rest) = (left / 86_400, left % 86_400);
    let (hours, minutes, seconds) = (rest / 3_600, rest % 3_600 / 60, rest % 60);
    let clock = format!("{:02} h {:02} min {:02} s", hours, minutes, seconds);
    if days > 0 {
        Some(format!("{} d {}", days, clock))
    } else {
        Some(clock)
    }
}
