//! Club group events split around the current time.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};

use super::club::CLUB_URL_BASE;
use super::types::{EventSummary, EventsReport, StravaEvent, text_or};

/// Milliseconds since the epoch for an ISO-8601 timestamp; offset-less values are UTC.
#[must_use]
pub fn start_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp_millis())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.and_utc().timestamp_millis())
        })
}

#[must_use]
pub fn event_url(club_id: &str, event_id: u64) -> String {
    format!("{CLUB_URL_BASE}/{club_id}/group_events/{event_id}")
}

fn summarize_one(event: StravaEvent, club_id: &str, now_ms: i64) -> EventSummary {
    let is_past = start_ms(&event.start_date).is_some_and(|start| start < now_ms);
    EventSummary {
        strava_url: event_url(club_id, event.id),
        id: event.id,
        title: event.title,
        description: text_or(event.description, ""),
        activity_type: text_or(event.activity_type, "Run"),
        start_date: event.start_date,
        start_date_local: event.start_date_local,
        address: text_or(event.address, ""),
        is_past,
    }
}

/// Earliest first; undated events go last.
fn soonest_first(a: &EventSummary, b: &EventSummary) -> Ordering {
    match (start_ms(&a.start_date), start_ms(&b.start_date)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Upcoming events ascending, past events most recent first.
#[must_use]
pub fn summarize(events: Vec<StravaEvent>, club_id: &str, now_ms: i64) -> EventsReport {
    let (mut past, mut upcoming): (Vec<_>, Vec<_>) = events
        .into_iter()
        .map(|event| summarize_one(event, club_id, now_ms))
        .partition(|event| event.is_past);
    upcoming.sort_by(soonest_first);
    past.sort_by(|a, b| soonest_first(b, a));
    EventsReport { upcoming, past }
}
