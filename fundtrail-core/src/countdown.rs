//! Time remaining until a target instant.

use chrono::DateTime;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Broken-down remaining time. All fields are zero once complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub complete: bool,
}

impl Countdown {
    /// Remaining time from `now_ms` until `target_ms` (both epoch milliseconds).
    #[must_use]
    pub const fn until(target_ms: i64, now_ms: i64) -> Self {
        let distance = target_ms.saturating_sub(now_ms);
        if distance <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                complete: true,
            };
        }
        Self {
            days: distance / DAY_MS,
            hours: (distance % DAY_MS) / HOUR_MS,
            minutes: (distance % HOUR_MS) / MINUTE_MS,
            seconds: (distance % MINUTE_MS) / SECOND_MS,
            complete: false,
        }
    }

    /// Days unpadded; the clock parts padded to two digits.
    #[must_use]
    pub fn formatted(&self) -> FormattedCountdown {
        FormattedCountdown {
            days: self.days.to_string(),
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCountdown {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

/// Epoch milliseconds of an RFC 3339 timestamp.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.timestamp_millis())
}
