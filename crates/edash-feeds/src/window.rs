//! UTC date arithmetic for the publications window.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Days before today included in the window (today counts as the seventh).
const WINDOW_DAYS_BEFORE_TODAY: i64 = 6;

/// RFC 2822 shapes with the zone left off.
const ZONELESS_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%d %b %Y %H:%M",
];

/// Midnight at the start of `now`'s day, in UTC.
#[must_use]
pub fn start_of_today_utc(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Inclusive lower bound of the trailing seven-day window.
#[must_use]
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    start_of_today_utc(now) - Duration::days(WINDOW_DAYS_BEFORE_TODAY)
}

/// `true` when `timestamp` is present and not before `start`.
///
/// There is no upper bound; future-dated entries pass.
#[must_use]
pub fn in_window(timestamp: Option<DateTime<Utc>>, start: DateTime<Utc>) -> bool {
    timestamp.is_some_and(|t| t >= start)
}

/// ISO-8601 text for a UTC timestamp, truncated to whole seconds.
///
/// Fixed width and zero-padded, so lexicographic order is chronological
/// order. Timestamps within the same second compare equal.
#[must_use]
pub fn iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses an RSS `pubDate` leniently.
///
/// Accepts RFC 2822 (including obsolete zone names), RFC 3339, and RFC 2822
/// with no zone or an unrecognised zone name such as `CET` (read as UTC).
/// Returns `None` for anything else.
#[must_use]
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    parse_zoneless(raw).or_else(|| strip_zone_name(raw).and_then(parse_zoneless))
}

fn parse_zoneless(raw: &str) -> Option<DateTime<Utc>> {
    ZONELESS_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Drops a trailing alphabetic zone token (`CET`, `CEST`, ...).
fn strip_zone_name(raw: &str) -> Option<&str> {
    let (head, token) = raw.rsplit_once(' ')?;
    (!token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()))
        .then_some(head.trim_end())
}
