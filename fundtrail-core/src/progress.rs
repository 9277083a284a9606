//! Fundraising progress math shared by the tracker bar and the map.

use serde::{Deserialize, Serialize};

use crate::format::group_thousands;

/// Route length when the data source does not provide a usable total.
pub const DEFAULT_TOTAL_KM: f64 = 20_000.0;

/// Remote document `{fundedKm, totalKm}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressData {
    #[serde(default)]
    pub funded_km: f64,
    #[serde(default)]
    pub total_km: f64,
}

impl Default for ProgressData {
    fn default() -> Self {
        Self {
            funded_km: 0.0,
            total_km: DEFAULT_TOTAL_KM,
        }
    }
}

impl ProgressData {
    #[must_use]
    pub const fn new(funded_km: f64, total_km: f64) -> Self {
        Self {
            funded_km,
            total_km,
        }
    }

    /// Repair a document so that `total_km > 0` holds.
    ///
    /// Missing, negative or non-finite funding counts as zero; a missing or
    /// non-positive total is replaced by `fallback_total`.
    #[must_use]
    pub fn normalized(self, fallback_total: f64) -> Self {
        let funded_km = if self.funded_km.is_finite() && self.funded_km > 0.0 {
            self.funded_km
        } else {
            0.0
        };
        let total_km = if self.total_km.is_finite() && self.total_km > 0.0 {
            self.total_km
        } else if fallback_total.is_finite() && fallback_total > 0.0 {
            fallback_total
        } else {
            DEFAULT_TOTAL_KM
        };
        Self {
            funded_km,
            total_km,
        }
    }

    /// Unclamped completion percentage; exceeds 100 when overfunded.
    #[must_use]
    pub fn raw_percent(&self) -> f64 {
        let n = self.normalized(DEFAULT_TOTAL_KM);
        n.funded_km / n.total_km * 100.0
    }

    /// Completion percentage capped to `[0, 100]` for drawing.
    #[must_use]
    pub fn visual_percent(&self) -> f64 {
        self.raw_percent().clamp(0.0, 100.0)
    }

    /// Visual percentage with a 1% floor so an empty bar still shows a sliver.
    #[must_use]
    pub fn display_percent(&self) -> f64 {
        self.visual_percent().max(1.0)
    }

    #[must_use]
    pub fn is_overfunded(&self) -> bool {
        self.bonus_km().is_some()
    }

    /// Kilometres funded beyond the goal, if any.
    #[must_use]
    pub fn bonus_km(&self) -> Option<f64> {
        let n = self.normalized(DEFAULT_TOTAL_KM);
        (n.funded_km > n.total_km).then(|| n.funded_km - n.total_km)
    }

    #[must_use]
    pub fn formatted_funded(&self) -> String {
        group_thousands(self.funded_km)
    }

    #[must_use]
    pub fn formatted_total(&self) -> String {
        group_thousands(self.total_km)
    }
}

/// Which way the runner travels across the artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// East to west: progress fills from the right edge.
    #[default]
    #[serde(rename = "rtl")]
    RightToLeft,
    #[serde(rename = "ltr")]
    LeftToRight,
}

impl Direction {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::RightToLeft => "westward",
            Self::LeftToRight => "eastward",
        }
    }
}

/// Start/end names for the spoken summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEnds {
    pub start: &'static str,
    pub finish: &'static str,
    pub direction: Direction,
}

impl Default for RouteEnds {
    fn default() -> Self {
        Self {
            start: "Vladivostok",
            finish: "Cabo da Roca",
            direction: Direction::RightToLeft,
        }
    }
}

/// Overfunding banner, shown iff funding exceeds the goal.
#[must_use]
pub fn overfund_message(data: &ProgressData) -> Option<String> {
    data.bonus_km()
        .map(|bonus| format!("+{} bonus km funded beyond the goal!", group_thousands(bonus)))
}

/// Screen-reader sentence for the tracker live region.
#[must_use]
pub fn tracker_announcement(data: &ProgressData, route: &RouteEnds, cached: bool) -> String {
    let cached_note = if cached { ", showing cached data" } else { "" };
    format!(
        "{} of {} kilometers funded, {:.1} percent complete, running {} from {} to {}{cached_note}",
        data.formatted_funded(),
        data.formatted_total(),
        data.visual_percent(),
        route.direction.heading(),
        route.start,
        route.finish,
    )
}

/// Screen-reader sentence for the map live region.
#[must_use]
pub fn map_announcement(data: &ProgressData, cached: bool) -> String {
    let cached_note = if cached { ", showing cached data" } else { "" };
    format!(
        "{} of {} kilometers funded, {:.1} percent complete{cached_note}",
        data.formatted_funded(),
        data.formatted_total(),
        data.visual_percent(),
    )
}

/// Stroke geometry for the "unlocked" part of the route bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeReveal {
    pub dash_array: f64,
    pub dash_offset: f64,
    /// Arc length at which the progress indicator sits.
    pub indicator_length: f64,
}

/// Dash geometry revealing `percent` of a path of `path_length`.
///
/// An offset equal to the path length hides the stroke; zero shows all of it.
#[must_use]
pub fn stroke_reveal(path_length: f64, percent: f64) -> StrokeReveal {
    let length = if path_length.is_finite() {
        path_length.max(0.0)
    } else {
        0.0
    };
    let fraction = percent.clamp(0.0, 100.0) / 100.0;
    StrokeReveal {
        dash_array: length,
        dash_offset: length * (1.0 - fraction),
        indicator_length: length * fraction,
    }
}
