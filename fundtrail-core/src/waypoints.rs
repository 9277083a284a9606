//! Static route milestones.

use std::fmt;

use crate::format::group_thousands;

/// Stable identifier of a map waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaypointId(pub &'static str);

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named milestone on the map overlay.
///
/// `x`/`y` are percentages of the map artwork.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub id: WaypointId,
    pub name: &'static str,
    pub km: f64,
    pub x: f64,
    pub y: f64,
    pub country: &'static str,
    pub info: &'static str,
}

impl Waypoint {
    #[must_use]
    pub fn is_reached(&self, funded_km: f64) -> bool {
        funded_km >= self.km
    }

    /// Accessible name for the marker button.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("{}, {} - {} km", self.name, self.country, group_thousands(self.km))
    }

    #[must_use]
    pub fn distance_label(&self) -> String {
        format!("{} km from start", group_thousands(self.km))
    }
}

const fn waypoint(
    id: &'static str,
    name: &'static str,
    km: f64,
    x: f64,
    y: f64,
    country: &'static str,
    info: &'static str,
) -> Waypoint {
    Waypoint {
        id: WaypointId(id),
        name,
        km,
        x,
        y,
        country,
        info,
    }
}

/// Map markers, ordered from start to finish.
pub const MAP_WAYPOINTS: [Waypoint; 10] = [
    waypoint("vladivostok", "Vladivostok", 0.0, 96.0, 43.0, "Russia", "Start - Pacific coast of Russia"),
    waypoint("beijing", "Beijing", 1_854.0, 86.0, 59.0, "China", "Through the Great Wall"),
    waypoint("xian", "Xi'an", 3_000.0, 82.5, 76.0, "China", "Ancient Silk Road capital"),
    waypoint("urumqi", "Urumqi", 5_584.0, 72.5, 53.0, "China", "Gateway to Central Asia"),
    waypoint("samarkand", "Samarkand", 8_262.0, 52.0, 60.0, "Uzbekistan", "Heart of the Silk Road"),
    waypoint("iran", "Iran", 11_500.0, 44.0, 79.0, "Iran", "Persian highlands crossing"),
    waypoint("istanbul", "Istanbul", 13_500.0, 28.0, 53.0, "Turkey", "Where East meets West"),
    waypoint("italy", "Italy", 16_500.0, 17.0, 36.0, "Italy", "Through the Alps"),
    waypoint("santiago", "Santiago", 19_000.0, 4.0, 50.0, "Spain", "Camino de Santiago"),
    waypoint("lisbon", "Cabo da Roca", 20_000.0, 4.0, 64.0, "Portugal", "Finish - Westernmost point of Eurasia"),
];

/// Look up a map waypoint by id.
#[must_use]
pub fn find(id: WaypointId) -> Option<&'static Waypoint> {
    MAP_WAYPOINTS.iter().find(|wp| wp.id == id)
}

/// Look up a map waypoint by its raw id string.
#[must_use]
pub fn find_by_str(id: &str) -> Option<&'static Waypoint> {
    MAP_WAYPOINTS.iter().find(|wp| wp.id.0 == id)
}

/// Every map waypoint reached at `funded_km`.
pub fn reached(funded_km: f64) -> impl Iterator<Item = &'static Waypoint> {
    MAP_WAYPOINTS.iter().filter(move |wp| wp.is_reached(funded_km))
}

/// City label under the compact (mobile) progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerLabel {
    pub name: &'static str,
    pub km: f64,
    /// Horizontal position along the bar, in percent.
    pub position: f64,
}

impl TrackerLabel {
    #[must_use]
    pub fn is_reached(&self, funded_km: f64) -> bool {
        funded_km >= self.km
    }
}

pub const TRACKER_LABELS: [TrackerLabel; 8] = [
    TrackerLabel { name: "Vladivostok", km: 0.0, position: 0.0 },
    TrackerLabel { name: "Beijing", km: 1_854.0, position: 9.27 },
    TrackerLabel { name: "Urumqi", km: 5_584.0, position: 27.92 },
    TrackerLabel { name: "Samarkand", km: 8_262.0, position: 41.31 },
    TrackerLabel { name: "Istanbul", km: 13_244.0, position: 66.22 },
    TrackerLabel { name: "Italy", km: 16_387.0, position: 81.94 },
    TrackerLabel { name: "Santiago", km: 17_167.0, position: 85.84 },
    TrackerLabel { name: "Cabo da Roca", km: 20_000.0, position: 100.0 },
];
