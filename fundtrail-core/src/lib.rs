//! Fundtrail Core
//!
//! Platform-agnostic logic for the 20,000 km fundraising run site: progress
//! math, route geometry, animation timing, the shared TTL cache and the feed
//! mappings. Nothing here touches the DOM or the network directly.

pub mod animation;
pub mod cache;
pub mod countdown;
pub mod error;
pub mod feeds;
pub mod format;
pub mod fundraising;
pub mod numbers;
pub mod path;
pub mod progress;
pub mod reveal;
pub mod sensory;
pub mod storage;
pub mod tooltip;
pub mod waypoints;

// Re-export commonly used types
pub use animation::{Counter, RunnerAnimation, RunnerFrame, Tween, TypewriterSchedule, ease_out_cubic};
pub use cache::{CacheEnvelope, CacheOrigin, Cached, TtlCache, ttl};
pub use countdown::Countdown;
pub use error::{FetchError, StorageError};
pub use feeds::{FeedError, FeedResponse, PodcastEpisode, SubstackPost};
pub use fundraising::FundraisingView;
pub use path::{PathError, Point, RoutePath};
pub use progress::{Direction, ProgressData, RouteEnds};
pub use reveal::{RevealAction, RevealOptions};
pub use sensory::{MotionSettings, SensoryMode};
pub use storage::{Clock, KeyValueStore, MemoryStore, keys};
pub use tooltip::{PinState, TooltipEvent, TooltipMachine};
pub use waypoints::{MAP_WAYPOINTS, TRACKER_LABELS, Waypoint, WaypointId};

/// Hands out the per-feature caches over one store and clock.
pub struct Campaign<S, C>
where
    S: KeyValueStore + Clone,
    C: Clock + Clone,
{
    store: S,
    clock: C,
}

impl<S, C> Campaign<S, C>
where
    S: KeyValueStore + Clone,
    C: Clock + Clone,
{
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    fn cache<T>(&self, key: &str, ttl: std::time::Duration) -> TtlCache<T, S, C>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        TtlCache::new(self.store.clone(), self.clock.clone(), key, ttl)
    }

    /// Header/hero fundraising numbers.
    pub fn fundraising(&self) -> TtlCache<ProgressData, S, C> {
        self.cache(keys::FUNDRAISING, ttl::FUNDRAISING)
    }

    /// Route tracker bar.
    pub fn route_tracker(&self) -> TtlCache<ProgressData, S, C> {
        self.cache(keys::ROUTE_TRACKER, ttl::FUNDRAISING)
    }

    /// Interactive map.
    pub fn interactive_map(&self) -> TtlCache<ProgressData, S, C> {
        self.cache(keys::INTERACTIVE_MAP, ttl::FUNDRAISING)
    }

    pub fn podcast(&self) -> TtlCache<Vec<PodcastEpisode>, S, C> {
        self.cache(keys::PODCAST_FEED, ttl::FEEDS)
    }

    pub fn substack(&self) -> TtlCache<Vec<SubstackPost>, S, C> {
        self.cache(keys::SUBSTACK_FEED, ttl::FEEDS)
    }

    pub fn motion(&self) -> MotionSettings<S> {
        MotionSettings::new(self.store.clone())
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ManualClock;
    use std::sync::Arc;

    #[test]
    fn caches_use_their_own_keys_and_ttls() {
        let campaign = Campaign::new(Arc::new(MemoryStore::new()), Arc::new(ManualClock::default()));
        assert_eq!(campaign.fundraising().key(), "fundraising_data");
        assert_eq!(campaign.route_tracker().key(), "routeTracker_lastData");
        assert_eq!(campaign.interactive_map().key(), "interactiveMap_data");
        assert_eq!(campaign.podcast().key(), "20000km_podcast_feed");
        assert_eq!(campaign.substack().key(), "20000km_substack_feed");
        assert_eq!(campaign.podcast().ttl(), ttl::FEEDS);
        assert_eq!(campaign.route_tracker().ttl(), ttl::FUNDRAISING);
    }

    #[test]
    fn features_share_the_store() {
        let store = Arc::new(MemoryStore::new());
        let campaign = Campaign::new(store.clone(), Arc::new(ManualClock::starting_at(9)));
        campaign.interactive_map().write(&ProgressData::new(1.0, 2.0));
        campaign.motion().enable();
        assert!(store.get_item(keys::INTERACTIVE_MAP).unwrap().is_some());
        assert_eq!(store.get_item(keys::SENSORY_MODE).unwrap().as_deref(), Some("motion-allowed"));
        assert!(campaign.route_tracker().read_any().is_none());
        assert_eq!(campaign.clock().now_ms(), 9);
    }
}
