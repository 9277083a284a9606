#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fundtrail_core::storage::ManualClock;
use fundtrail_proxy::strava::ClubApi;
use fundtrail_proxy::strava::types::{StravaActivity, StravaAthlete, StravaClub, StravaEvent};
use fundtrail_proxy::{FallbackPolicy, ProxyError, StravaService};

/// 2025-06-01T12:00:00Z
pub const NOW_MS: u64 = 1_748_779_200_000;

/// Scripted upstream: serves its payloads until told to fail.
#[derive(Default)]
pub struct FakeApi {
    pub failure: Mutex<Option<ProxyError>>,
    pub calls: AtomicUsize,
    pub club: StravaClub,
    pub activities: Vec<StravaActivity>,
    pub events: Vec<StravaEvent>,
}

impl FakeApi {
    pub fn club_with_data() -> Self {
        Self {
            club: StravaClub {
                id: 42,
                name: "20,000 km Run".into(),
                member_count: 318,
                url: Some("20000km".into()),
                ..StravaClub::default()
            },
            activities: (0..12).map(|n| activity(n, 5_000.0, 1_500)).collect(),
            events: vec![
                event(1, "2025-05-01T07:00:00Z"),
                event(2, "2025-07-01T07:00:00Z"),
            ],
            ..Self::default()
        }
    }

    pub fn failing(err: ProxyError) -> Self {
        let api = Self::default();
        api.fail_with(err);
        api
    }

    pub fn fail_with(&self, err: ProxyError) {
        if let Ok(mut slot) = self.failure.lock() {
            *slot = Some(err);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn outcome<T: Clone>(&self, value: &T) -> Result<T, ProxyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().ok().and_then(|slot| slot.clone()) {
            Some(err) => Err(err),
            None => Ok(value.clone()),
        }
    }
}

#[async_trait]
impl ClubApi for FakeApi {
    async fn club(&self) -> Result<StravaClub, ProxyError> {
        self.outcome(&self.club)
    }

    async fn activities(&self, per_page: usize) -> Result<Vec<StravaActivity>, ProxyError> {
        self.outcome(&self.activities)
            .map(|all| all.into_iter().take(per_page).collect())
    }

    async fn group_events(&self) -> Result<Vec<StravaEvent>, ProxyError> {
        self.outcome(&self.events)
    }
}

pub fn activity(n: u32, distance: f64, moving_time: u64) -> StravaActivity {
    StravaActivity {
        athlete: StravaAthlete {
            firstname: format!("Runner{n}"),
            lastname: "Smith".into(),
        },
        name: format!("Run {n}"),
        distance,
        moving_time,
        elapsed_time: moving_time,
        total_elevation_gain: 10.0,
        kind: Some("Run".into()),
    }
}

pub fn event(id: u64, start: &str) -> StravaEvent {
    StravaEvent {
        id,
        title: format!("Group run {id}"),
        start_date: start.into(),
        start_date_local: start.into(),
        ..StravaEvent::default()
    }
}

pub struct Harness {
    pub api: Arc<FakeApi>,
    pub clock: Arc<ManualClock>,
    pub service: Arc<StravaService>,
}

pub fn harness(api: FakeApi, fallback: FallbackPolicy) -> Harness {
    let api = Arc::new(api);
    let clock = Arc::new(ManualClock::starting_at(NOW_MS));
    let service = Arc::new(StravaService::new(
        api.clone(),
        clock.clone(),
        "20000km",
        fallback,
    ));
    Harness {
        api,
        clock,
        service,
    }
}
