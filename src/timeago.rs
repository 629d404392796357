//! Fuzzy relative timestamps ("about 2 hours ago") for token creation dates.
//!
//! Thresholds and wording follow the jQuery timeago plugin the settings
//! templates were written against, so server-rendered and refreshed labels
//! read the same.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse the timestamp carried by a `.token-created-at` element.
///
/// Accepts RFC 3339 and naive `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Describe `then` relative to `now`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = (now - then).num_milliseconds();
    let suffix = if millis < 0 { "from now" } else { "ago" };

    let seconds = millis.unsigned_abs() as f64 / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let years = days / 365.0;

    let words = if seconds < 45.0 {
        "less than a minute".to_string()
    } else if seconds < 90.0 {
        "about a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes.round())
    } else if minutes < 90.0 {
        "about an hour".to_string()
    } else if hours < 24.0 {
        format!("about {} hours", hours.round())
    } else if hours < 42.0 {
        "a day".to_string()
    } else if days < 30.0 {
        format!("{} days", days.round())
    } else if days < 45.0 {
        "about a month".to_string()
    } else if days < 365.0 {
        format!("{} months", (days / 30.0).round())
    } else if years < 1.5 {
        "about a year".to_string()
    } else {
        format!("{} years", years.round())
    };

    format!("{words} {suffix}")
}
