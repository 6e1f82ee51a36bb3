//! Timestamp handling for shipment and logger records
//!
//! Source records carry timestamps as raw text: mission dates, milestone
//! arrivals, excursion starts and per-reading instants all arrive as strings
//! that may be well-formed, empty, or placeholder junk like "n/a".
//!
//! The policy here is graceful degradation: parsing never errors. A value
//! that cannot be understood is `None`, and callers treat `None` as "this
//! record has no usable timestamp" rather than a failure.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Accepted datetime layouts, tried in order after RFC 3339.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Date-only layout; parses to midnight UTC.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Chart label layout, e.g. "Jul 15 09:00".
const LABEL_FORMAT: &str = "%b %d %H:%M";

/// Parse a raw timestamp string into a UTC instant.
///
/// Accepts RFC 3339 (`2025-07-15T09:00:00Z`), `YYYY-MM-DD HH:MM[:SS]`,
/// and bare `YYYY-MM-DD` (interpreted as midnight). Empty strings and
/// "n/a" placeholders yield `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Parse a raw date string (`YYYY-MM-DD`), tolerating surrounding whitespace.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// First instant of the given day: 00:00:00.000 UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Last instant of the given day at millisecond precision: 23:59:59.999 UTC.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Combine a date with an optional time-of-day into an inclusive lower bound.
pub fn range_start(date: NaiveDate, time: Option<NaiveTime>) -> DateTime<Utc> {
    match time {
        Some(time) => Utc.from_utc_datetime(&date.and_time(time)),
        None => start_of_day(date),
    }
}

/// Combine a date with an optional time-of-day into an inclusive upper bound.
pub fn range_end(date: NaiveDate, time: Option<NaiveTime>) -> DateTime<Utc> {
    match time {
        Some(time) => Utc.from_utc_datetime(&date.and_time(time)),
        None => end_of_day(date),
    }
}

/// Human-readable chart label for a row timestamp.
pub fn format_label(instant: DateTime<Utc>) -> String {
    instant.format(LABEL_FORMAT).to_string()
}
