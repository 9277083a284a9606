//! Upstream payloads and the camelCase shapes served to the site.

use serde::{Deserialize, Serialize};

/// `GET /clubs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StravaClub {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub member_count: u64,
    pub profile_medium: Option<String>,
    pub cover_photo: Option<String>,
    /// Vanity slug used in the public club URL.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StravaAthlete {
    pub firstname: String,
    pub lastname: String,
}

/// One entry of `GET /clubs/{id}/activities`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StravaActivity {
    pub athlete: StravaAthlete,
    pub name: String,
    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub moving_time: u64,
    pub elapsed_time: u64,
    pub total_elevation_gain: f64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// One entry of `GET /clubs/{id}/group_events`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StravaEvent {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub activity_type: Option<String>,
    pub start_date: String,
    pub start_date_local: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSummary {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub member_count: u64,
    pub city: String,
    pub country: String,
    pub profile_image: String,
    pub cover_image: String,
    pub strava_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// "First L."
    pub athlete_name: String,
    pub name: String,
    pub distance: f64,
    pub distance_km: String,
    pub moving_time: u64,
    pub moving_time_formatted: String,
    pub elevation_gain: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesReport {
    pub activities: Vec<ActivitySummary>,
    /// Activities in the upstream page, before any limit.
    pub total_count: usize,
    pub total_distance_km: u64,
    pub total_elevation_gain: u64,
    pub total_moving_time_seconds: u64,
    pub total_moving_time_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub activity_type: String,
    pub start_date: String,
    pub start_date_local: String,
    pub address: String,
    pub strava_url: String,
    pub is_past: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsReport {
    pub upcoming: Vec<EventSummary>,
    pub past: Vec<EventSummary>,
}

/// Treat missing and blank strings alike.
pub(crate) fn text_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
