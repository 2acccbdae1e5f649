use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// `Date.prototype.toString()` without the trailing `(Zone Name)` part.
const LEGACY_STATUS_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub title: String,

    /// Creation timestamp, kept as the exact string that was stored.
    pub status: String,
}

impl Card {
    pub fn new(title: String, now: DateTime<Utc>) -> Self {
        Self {
            title,
            status: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_status(&self.status)
    }
}

/// Parses a card status into an instant.
///
/// Accepts RFC 3339 (what new cards are stamped with), ISO dates and
/// date-times without an offset, and the shape produced by JavaScript's
/// `Date.toString()`, e.g.
/// `Fri Oct 16 2026 10:00:00 GMT+0800 (China Standard Time)`.
///
/// Offset-less forms are read as UTC.
pub fn parse_status(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Some(midnight.and_utc());
    }

    let without_zone_name = match trimmed.split_once(" (") {
        Some((head, _)) => head,
        None => trimmed,
    };
    DateTime::parse_from_str(without_zone_name, LEGACY_STATUS_FORMAT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
