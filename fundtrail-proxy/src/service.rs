//! Cached endpoint logic shared by the HTTP handlers.
//!
//! Each endpoint owns one [`TtlCache`] over an in-memory store. A failed
//! refresh serves the last good response; with nothing cached the caller gets
//! the zeroed shape (or the sample data under the placeholder policy).

use std::sync::Arc;
use std::time::Duration;

use fundtrail_core::storage::{Clock, MemoryStore};
use fundtrail_core::{TtlCache, ttl};
use log::{error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::FallbackPolicy;
use crate::error::ProxyError;
use crate::strava::{
    ActivitiesReport, ClubApi, ClubSummary, EventsReport, activities, club, events, placeholder,
};

pub type SharedClock = Arc<dyn Clock + Send + Sync>;
type Slot<T> = TtlCache<T, MemoryStore, SharedClock>;

pub mod cache_keys {
    pub const CLUB: &str = "strava_club";
    pub const ACTIVITIES: &str = "strava_activities";
    pub const EVENTS: &str = "strava_events";
}

fn slot<T>(clock: &SharedClock, key: &str, ttl: Duration) -> Slot<T>
where
    T: Serialize + DeserializeOwned,
{
    TtlCache::new(MemoryStore::new(), Arc::clone(clock), key, ttl)
}

fn failure_message(endpoint: &str, err: &ProxyError) -> String {
    match err {
        ProxyError::CredentialMissing => err.to_string(),
        _ if err.is_auth_failure() => {
            format!("{endpoint}: Strava access token expired or invalid ({err})")
        }
        _ => format!("{endpoint}: {err}"),
    }
}

pub struct StravaService {
    api: Arc<dyn ClubApi>,
    clock: SharedClock,
    club_id: String,
    fallback: FallbackPolicy,
    club: Slot<ClubSummary>,
    activities: Slot<ActivitiesReport>,
    events: Slot<EventsReport>,
}

impl StravaService {
    pub fn new(
        api: Arc<dyn ClubApi>,
        clock: SharedClock,
        club_id: impl Into<String>,
        fallback: FallbackPolicy,
    ) -> Self {
        Self {
            club: slot(&clock, cache_keys::CLUB, ttl::CLUB),
            activities: slot(&clock, cache_keys::ACTIVITIES, ttl::ACTIVITIES),
            events: slot(&clock, cache_keys::EVENTS, ttl::EVENTS),
            api,
            clock,
            club_id: club_id.into(),
            fallback,
        }
    }

    #[must_use]
    pub const fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    fn report_failure(endpoint: &str, err: &ProxyError) {
        error!("{}", failure_message(endpoint, err));
    }

    pub async fn club(&self) -> ClubSummary {
        let api = &self.api;
        let club_id = self.club_id.as_str();
        let outcome = self
            .club
            .get_or_fetch(|| async move {
                api.club().await.map(|raw| club::summarize(raw, club_id))
            })
            .await;
        match outcome {
            Ok(cached) => cached.value,
            Err(err) => {
                Self::report_failure("club", &err);
                ClubSummary::default()
            }
        }
    }

    /// The first `limit` activities; totals always cover the full page.
    pub async fn activities(&self, limit: usize) -> ActivitiesReport {
        let api = &self.api;
        let outcome = self
            .activities
            .get_or_fetch(|| async move {
                api.activities(activities::PAGE_SIZE)
                    .await
                    .map(activities::summarize)
            })
            .await;
        let report = match outcome {
            Ok(cached) => cached.value,
            Err(err) => {
                Self::report_failure("activities", &err);
                match (&err, self.fallback) {
                    (ProxyError::CredentialMissing, FallbackPolicy::Placeholder) => {
                        info!("serving placeholder activities");
                        placeholder::activities()
                    }
                    _ => ActivitiesReport::empty(),
                }
            }
        };
        report.limited(limit)
    }

    /// Events are classified as past or upcoming when fetched.
    pub async fn events(&self) -> EventsReport {
        let api = &self.api;
        let club_id = self.club_id.as_str();
        let now_ms = i64::try_from(self.clock.now_ms()).unwrap_or(i64::MAX);
        let outcome = self
            .events
            .get_or_fetch(|| async move {
                api.group_events()
                    .await
                    .map(|raw| events::summarize(raw, club_id, now_ms))
            })
            .await;
        match outcome {
            Ok(cached) => cached.value,
            Err(err) => {
                Self::report_failure("events", &err);
                EventsReport::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_tokens_are_called_out() {
        assert_eq!(
            failure_message("club", &ProxyError::Status(401)),
            "club: Strava access token expired or invalid (Strava API error: HTTP 401)"
        );
        assert_eq!(
            failure_message("events", &ProxyError::CredentialMissing),
            "Strava API error: No valid access token"
        );
        assert_eq!(
            failure_message("activities", &ProxyError::Status(503)),
            "activities: Strava API error: HTTP 503"
        );
    }
}
