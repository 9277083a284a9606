//! Recent club activities and their running totals.

use fundtrail_core::format::{format_clock, format_distance_km};
use fundtrail_core::numbers::round_f64_to_u64;

use super::types::{ActivitiesReport, ActivitySummary, StravaActivity, text_or};

/// Activities requested from Strava per refresh.
pub const PAGE_SIZE: usize = 30;
pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = PAGE_SIZE;

/// `?limit=` as served: leading integer, non-positive or unparsable means the default.
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim) else {
        return DEFAULT_LIMIT;
    };
    let digits_end = raw
        .char_indices()
        .find(|&(idx, c)| !(c.is_ascii_digit() || (idx == 0 && (c == '-' || c == '+'))))
        .map_or(raw.len(), |(idx, _)| idx);
    match raw[..digits_end].parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).map_or(MAX_LIMIT, |n| n.min(MAX_LIMIT)),
        _ => DEFAULT_LIMIT,
    }
}

/// "Firstname L." with the initial dropped when there is no surname.
#[must_use]
pub fn athlete_name(first: &str, last: &str) -> String {
    match last.chars().next() {
        Some(initial) => format!("{first} {initial}."),
        None => first.to_string(),
    }
}

fn summarize_one(activity: StravaActivity) -> ActivitySummary {
    ActivitySummary {
        athlete_name: athlete_name(&activity.athlete.firstname, &activity.athlete.lastname),
        distance_km: format_distance_km(activity.distance),
        moving_time_formatted: format_clock(activity.moving_time),
        name: activity.name,
        distance: activity.distance,
        moving_time: activity.moving_time,
        elevation_gain: activity.total_elevation_gain,
        kind: text_or(activity.kind, "Run"),
    }
}

/// Build the report from already summarised activities.
#[must_use]
pub fn report(activities: Vec<ActivitySummary>) -> ActivitiesReport {
    let total_m: f64 = activities.iter().map(|a| a.distance).sum();
    let total_elevation: f64 = activities.iter().map(|a| a.elevation_gain).sum();
    let total_seconds: u64 = activities.iter().map(|a| a.moving_time).sum();
    ActivitiesReport {
        total_count: activities.len(),
        total_distance_km: round_f64_to_u64(total_m / 1_000.0),
        total_elevation_gain: round_f64_to_u64(total_elevation),
        total_moving_time_seconds: total_seconds,
        total_moving_time_formatted: format_clock(total_seconds),
        activities,
    }
}

#[must_use]
pub fn summarize(activities: Vec<StravaActivity>) -> ActivitiesReport {
    report(activities.into_iter().map(summarize_one).collect())
}

impl ActivitiesReport {
    /// All-zero report.
    #[must_use]
    pub fn empty() -> Self {
        report(Vec::new())
    }

    /// Keep the first `limit` activities; totals still describe the whole page.
    #[must_use]
    pub fn limited(mut self, limit: usize) -> Self {
        self.activities.truncate(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strava::types::StravaAthlete;

    fn activity(first: &str, last: &str, distance: f64, moving: u64, climb: f64) -> StravaActivity {
        StravaActivity {
            athlete: StravaAthlete {
                firstname: first.into(),
                lastname: last.into(),
            },
            name: "Morning Run".into(),
            distance,
            moving_time: moving,
            elapsed_time: moving + 60,
            total_elevation_gain: climb,
            kind: None,
        }
    }

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(parse_limit(None), 10);
        assert_eq!(parse_limit(Some("")), 10);
        assert_eq!(parse_limit(Some("abc")), 10);
        assert_eq!(parse_limit(Some("0")), 10);
        assert_eq!(parse_limit(Some("-5")), 10);
        assert_eq!(parse_limit(Some("5")), 5);
        assert_eq!(parse_limit(Some("12abc")), 12);
        assert_eq!(parse_limit(Some("99")), 30);
    }

    #[test]
    fn athlete_names_are_abbreviated() {
        assert_eq!(athlete_name("Sarah", "Miller"), "Sarah M.");
        assert_eq!(athlete_name("Team", ""), "Team");
        assert_eq!(athlete_name("Zoë", "Østergaard"), "Zoë Ø.");
    }

    #[test]
    fn summary_formats_distance_and_time() {
        let report = summarize(vec![
            activity("Sarah", "Miller", 8_200.0, 2_732, 45.4),
            activity("John", "Doe", 12_400.0, 4_325, 234.3),
        ]);
        let first = &report.activities[0];
        assert_eq!(first.athlete_name, "Sarah M.");
        assert_eq!(first.distance_km, "8.20");
        assert_eq!(first.moving_time_formatted, "45:32");
        assert_eq!(first.kind, "Run");
        assert_eq!(report.activities[1].distance_km, "12.4");
        assert_eq!(report.activities[1].moving_time_formatted, "1:12:05");

        assert_eq!(report.total_count, 2);
        assert_eq!(report.total_distance_km, 21);
        assert_eq!(report.total_elevation_gain, 280);
        assert_eq!(report.total_moving_time_seconds, 7_057);
        assert_eq!(report.total_moving_time_formatted, "1:57:37");
    }

    #[test]
    fn limit_keeps_the_totals() {
        let report = summarize(vec![
            activity("A", "B", 1_000.0, 60, 0.0),
            activity("C", "D", 2_000.0, 60, 0.0),
            activity("E", "F", 3_000.0, 60, 0.0),
        ])
        .limited(1);
        assert_eq!(report.activities.len(), 1);
        assert_eq!(report.total_count, 3);
        assert_eq!(report.total_distance_km, 6);
    }

    #[test]
    fn empty_report_is_zeroed() {
        let empty = ActivitiesReport::empty();
        assert!(empty.activities.is_empty());
        assert_eq!(empty.total_count, 0);
        assert_eq!(empty.total_moving_time_formatted, "0:00");
    }
}
