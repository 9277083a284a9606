//! Fundraising summary shown in page headers and hero sections.

use std::fmt::Display;

use crate::cache::Cached;
use crate::progress::{DEFAULT_TOTAL_KM, ProgressData};

/// Public gist holding the campaign's `{fundedKm, totalKm}` document.
pub const DEFAULT_DATA_URL: &str = "https://gist.githubusercontent.com/xatusc/c0f8cb44d773b6b06ac4cda016feb759/raw/fundraising-data.json";

/// Read-only projection of the latest fundraising state.
#[derive(Debug, Clone, PartialEq)]
pub struct FundraisingView {
    pub data: ProgressData,
    pub is_loading: bool,
    pub error: Option<String>,
    /// The numbers come from an expired cache entry.
    pub cached: bool,
}

impl Default for FundraisingView {
    fn default() -> Self {
        Self::loading()
    }
}

impl FundraisingView {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            data: ProgressData::default(),
            is_loading: true,
            error: None,
            cached: false,
        }
    }

    /// Settle the view from a cache lookup.
    ///
    /// With nothing to show the numbers reset to `0 / 20,000` and the error is kept.
    #[must_use]
    pub fn from_outcome<E: Display>(outcome: Result<Cached<ProgressData>, E>) -> Self {
        match outcome {
            Ok(cached) => Self {
                data: cached.value.normalized(DEFAULT_TOTAL_KM),
                is_loading: false,
                error: None,
                cached: cached.is_fallback(),
            },
            Err(err) => Self {
                data: ProgressData::default(),
                is_loading: false,
                error: Some(err.to_string()),
                cached: false,
            },
        }
    }

    #[must_use]
    pub const fn funded_km(&self) -> f64 {
        self.data.funded_km
    }

    #[must_use]
    pub const fn total_km(&self) -> f64 {
        self.data.total_km
    }

    #[must_use]
    pub fn formatted_funded(&self) -> String {
        self.data.formatted_funded()
    }

    #[must_use]
    pub fn formatted_total(&self) -> String {
        self.data.formatted_total()
    }

    /// Completion percentage capped at 100.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.data.visual_percent()
    }

    /// [`progress`](Self::progress) with a 1% floor.
    #[must_use]
    pub fn display_progress(&self) -> f64 {
        self.data.display_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheOrigin;
    use crate::error::FetchError;

    #[test]
    fn settles_from_fetched_data() {
        let view = FundraisingView::from_outcome::<FetchError>(Ok(Cached {
            value: ProgressData::new(12_000.0, 20_000.0),
            origin: CacheOrigin::Fetched,
            timestamp: 0,
        }));
        assert!(!view.is_loading);
        assert_eq!(view.formatted_funded(), "12,000");
        assert!((view.progress() - 60.0).abs() < 1e-9);
        assert!(!view.cached);
    }

    #[test]
    fn failure_without_cache_resets_to_defaults() {
        let view = FundraisingView::from_outcome(Err::<Cached<ProgressData>, _>(
            FetchError::Status(500),
        ));
        assert_eq!(view.error.as_deref(), Some("HTTP error! status: 500"));
        assert!((view.funded_km() - 0.0).abs() < f64::EPSILON);
        assert!((view.total_km() - 20_000.0).abs() < f64::EPSILON);
        assert!((view.display_progress() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn stale_values_are_flagged() {
        let view = FundraisingView::from_outcome::<FetchError>(Ok(Cached {
            value: ProgressData::new(30_000.0, 0.0),
            origin: CacheOrigin::Stale,
            timestamp: 0,
        }));
        assert!(view.cached);
        assert!((view.total_km() - 20_000.0).abs() < f64::EPSILON);
        assert!((view.progress() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn starts_out_loading() {
        let view = FundraisingView::default();
        assert!(view.is_loading);
        assert_eq!(view.formatted_total(), "20,000");
    }
}
