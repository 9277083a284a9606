//! Sample activities served under [`FallbackPolicy::Placeholder`](crate::config::FallbackPolicy).

use fundtrail_core::format::{format_clock, format_distance_km};

use super::activities::report;
use super::types::{ActivitiesReport, ActivitySummary};

const SAMPLE: [(&str, &str, f64, u64, f64); 10] = [
    ("Sarah M.", "Morning Run", 8_200.0, 2_732, 45.0),
    ("John D.", "Trail Adventure", 12_400.0, 4_325, 234.0),
    ("Ria X.", "Long Run Sunday", 21_100.0, 7_275, 156.0),
    ("Team", "Recovery Jog", 5_000.0, 1_720, 12.0),
    ("Maria K.", "Tempo Run", 10_000.0, 2_940, 78.0),
    ("Alex P.", "Easy Miles", 6_500.0, 2_280, 32.0),
    ("Chris T.", "Hill Repeats", 7_800.0, 2_880, 189.0),
    ("Emma L.", "Sunrise Run", 5_200.0, 1_800, 24.0),
    ("David R.", "Fartlek Friday", 8_000.0, 2_520, 56.0),
    ("Lisa W.", "Park Loop", 4_200.0, 1_500, 18.0),
];

#[must_use]
pub fn activities() -> ActivitiesReport {
    report(
        SAMPLE
            .iter()
            .map(|&(athlete, name, distance, moving_time, climb)| ActivitySummary {
                athlete_name: athlete.to_string(),
                name: name.to_string(),
                distance,
                distance_km: format_distance_km(distance),
                moving_time,
                moving_time_formatted: format_clock(moving_time),
                elevation_gain: climb,
                kind: "Run".to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_totals_add_up() {
        let sample = activities();
        assert_eq!(sample.total_count, 10);
        assert_eq!(sample.total_distance_km, 88);
        assert_eq!(sample.total_elevation_gain, 844);
        assert_eq!(sample.total_moving_time_seconds, 29_972);
        assert_eq!(sample.total_moving_time_formatted, "8:19:32");
        assert_eq!(sample.activities[1].distance_km, "12.4");
        assert_eq!(sample.activities[1].moving_time_formatted, "1:12:05");
    }
}
