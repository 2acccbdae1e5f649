use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::card::parse_status;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Anything younger than this reads as "just now".
const JUST_NOW_MS: i64 = 9 * SECOND_MS;

/// "Time since" bucket for a card timestamp.
///
/// Counts are rounded up within their unit, so 61 s is `Minutes(2)` and
/// exactly one hour is `Hours(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    JustNow,
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl RelativeTime {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let ms = elapsed.num_milliseconds();
        if ms < JUST_NOW_MS {
            RelativeTime::JustNow
        } else if ms < MINUTE_MS {
            RelativeTime::Seconds(ceil_div(ms, SECOND_MS))
        } else if ms < HOUR_MS {
            RelativeTime::Minutes(ceil_div(ms, MINUTE_MS))
        } else if ms < DAY_MS {
            RelativeTime::Hours(ceil_div(ms, HOUR_MS))
        } else {
            RelativeTime::Days(ceil_div(ms, DAY_MS))
        }
    }

    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_elapsed(now.signed_duration_since(then))
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::JustNow => f.write_str("just now"),
            RelativeTime::Seconds(n) => write!(f, "{n} seconds ago"),
            RelativeTime::Minutes(n) => write!(f, "{n} minutes ago"),
            RelativeTime::Hours(n) => write!(f, "{n} hours ago"),
            RelativeTime::Days(n) => write!(f, "{n} days ago"),
        }
    }
}

/// Label for a card status as of `now`.
///
/// A status that does not parse as a timestamp is shown as-is.
pub fn relative_label(status: &str, now: DateTime<Utc>) -> String {
    match parse_status(status) {
        Some(then) => RelativeTime::between(then, now).to_string(),
        None => status.to_string(),
    }
}

// only called with value >= unit > 0
fn ceil_div(value: i64, unit: i64) -> i64 {
    (value + unit - 1) / unit
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{RelativeTime, relative_label};

    fn ms(value: i64) -> Duration {
        Duration::milliseconds(value)
    }

    #[test]
    fn just_now_below_nine_seconds() {
        assert_eq!(RelativeTime::from_elapsed(ms(0)), RelativeTime::JustNow);
        assert_eq!(RelativeTime::from_elapsed(ms(8_999)), RelativeTime::JustNow);
        assert_eq!(RelativeTime::from_elapsed(ms(-5_000)), RelativeTime::JustNow);
    }

    #[test]
    fn seconds_bucket_boundaries() {
        assert_eq!(RelativeTime::from_elapsed(ms(9_000)), RelativeTime::Seconds(9));
        assert_eq!(RelativeTime::from_elapsed(ms(9_001)), RelativeTime::Seconds(10));
        assert_eq!(RelativeTime::from_elapsed(ms(59_999)), RelativeTime::Seconds(60));
    }

    #[test]
    fn minutes_hours_days_boundaries() {
        assert_eq!(RelativeTime::from_elapsed(ms(60_000)), RelativeTime::Minutes(1));
        assert_eq!(RelativeTime::from_elapsed(ms(61_000)), RelativeTime::Minutes(2));
        assert_eq!(
            RelativeTime::from_elapsed(ms(3_599_999)),
            RelativeTime::Minutes(60)
        );
        assert_eq!(RelativeTime::from_elapsed(ms(3_600_000)), RelativeTime::Hours(1));
        assert_eq!(
            RelativeTime::from_elapsed(ms(86_399_999)),
            RelativeTime::Hours(24)
        );
        assert_eq!(RelativeTime::from_elapsed(ms(86_400_000)), RelativeTime::Days(1));
        assert_eq!(
            RelativeTime::from_elapsed(Duration::days(3) + ms(1)),
            RelativeTime::Days(4)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(RelativeTime::JustNow.to_string(), "just now");
        assert_eq!(RelativeTime::Seconds(9).to_string(), "9 seconds ago");
        assert_eq!(RelativeTime::Minutes(1).to_string(), "1 minutes ago");
        assert_eq!(RelativeTime::Hours(5).to_string(), "5 hours ago");
        assert_eq!(RelativeTime::Days(2).to_string(), "2 days ago");
    }

    #[test]
    fn label_from_status_string() {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .expect("valid now");
        assert_eq!(
            relative_label("2026-10-16T11:59:30.000Z", now),
            "30 seconds ago"
        );
        assert_eq!(relative_label("2026-10-16T11:59:30", now), "30 seconds ago");
        assert_eq!(relative_label("2026-10-15", now), "2 days ago");
        assert_eq!(relative_label("not a date", now), "not a date");
    }
}
