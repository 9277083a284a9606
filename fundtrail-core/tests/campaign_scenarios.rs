use std::sync::Arc;

use futures::executor::block_on;

use fundtrail_core::progress::{overfund_message, tracker_announcement};
use fundtrail_core::storage::ManualClock;
use fundtrail_core::waypoints::{TRACKER_LABELS, find_by_str};
use fundtrail_core::{
    CacheOrigin, Campaign, FetchError, FundraisingView, KeyValueStore, MemoryStore, ProgressData,
    RouteEnds, RoutePath, RunnerAnimation, TooltipEvent, TooltipMachine, ttl,
};

fn ms(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap()
}

#[test]
fn twelve_thousand_km_scenario() {
    let data = ProgressData::new(12_000.0, 20_000.0);
    assert_eq!(data.formatted_funded(), "12,000");
    assert!((data.visual_percent() - 60.0).abs() < 1e-9);
    assert!(overfund_message(&data).is_none());

    for reached in ["beijing", "urumqi", "samarkand"] {
        assert!(find_by_str(reached).unwrap().is_reached(data.funded_km), "{reached}");
    }
    for pending in ["istanbul", "italy", "santiago", "lisbon"] {
        assert!(!find_by_str(pending).unwrap().is_reached(data.funded_km), "{pending}");
    }

    let reached_labels: Vec<_> = TRACKER_LABELS
        .iter()
        .filter(|label| label.is_reached(data.funded_km))
        .map(|label| label.name)
        .collect();
    assert_eq!(reached_labels, ["Vladivostok", "Beijing", "Urumqi", "Samarkand"]);

    assert!(
        tracker_announcement(&data, &RouteEnds::default(), false)
            .starts_with("12,000 of 20,000 kilometers funded, 60.0 percent complete")
    );
}

#[test]
fn tracker_cache_survives_an_outage() {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::starting_at(1_700_000_000_000));
    let campaign = Campaign::new(store.clone(), clock.clone());
    let tracker = campaign.route_tracker();

    let first = block_on(tracker.get_or_fetch(|| async {
        Ok::<_, FetchError>(ProgressData::new(8_000.0, 20_000.0))
    }))
    .unwrap();
    assert_eq!(first.origin, CacheOrigin::Fetched);

    clock.advance(ms(ttl::FUNDRAISING) / 2);
    let second = block_on(tracker.get_or_fetch(|| async {
        Err::<ProgressData, _>(FetchError::Network("unreachable".into()))
    }))
    .unwrap();
    assert_eq!(second.origin, CacheOrigin::Fresh);

    clock.advance(ms(ttl::FUNDRAISING));
    let third = block_on(tracker.get_or_fetch(|| async {
        Err::<ProgressData, _>(FetchError::Status(503))
    }))
    .unwrap();
    assert!(third.is_fallback());
    assert_eq!(third.value, ProgressData::new(8_000.0, 20_000.0));

    // The map keeps its own entry.
    assert!(store.get_item("interactiveMap_data").unwrap().is_none());
}

#[test]
fn fundraising_view_follows_the_cache() {
    let campaign = Campaign::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::starting_at(0)),
    );
    let outcome = block_on(campaign.fundraising().get_or_fetch(|| async {
        Err::<ProgressData, _>(FetchError::Status(404))
    }));
    let view = FundraisingView::from_outcome(outcome);
    assert_eq!(view.error.as_deref(), Some("HTTP error! status: 404"));
    assert_eq!(view.formatted_total(), "20,000");

    let outcome = block_on(campaign.fundraising().revalidate(|| async {
        Ok::<_, FetchError>(ProgressData::new(21_000.0, 20_000.0))
    }));
    let view = FundraisingView::from_outcome(outcome);
    assert!(view.error.is_none());
    assert!((view.progress() - 100.0).abs() < 1e-9);
    assert_eq!(
        overfund_message(&view.data).as_deref(),
        Some("+1,000 bonus km funded beyond the goal!")
    );
}

#[test]
fn runner_on_the_map_route_stops_where_funding_does() {
    let route = RoutePath::map_route().unwrap();
    let data = ProgressData::new(10_000.0, 20_000.0);
    let animation = RunnerAnimation::new(route.clone(), data.visual_percent(), 2_000.0, false);

    let start = animation.frame(0.0);
    let end = animation.frame(2_000.0);
    assert!((start.position.x - 95.0).abs() < 1e-9);
    let halfway = route.point_at_percent(50.0);
    assert!((end.position.x - halfway.x).abs() < 1e-9);
    assert!((end.position.y - halfway.y).abs() < 1e-9);
    assert_eq!(end.clip_path(), format!("inset(0 0 0 {}%)", halfway.x));
}

#[test]
fn tooltip_pins_walk_through_a_session() {
    let beijing = find_by_str("beijing").unwrap().id;
    let italy = find_by_str("italy").unwrap().id;

    let mut machine = TooltipMachine::new();
    machine.apply(TooltipEvent::Hover(beijing));
    assert_eq!(machine.visible_waypoint(), Some(beijing));
    machine.apply(TooltipEvent::WaypointClick(italy));
    machine.apply(TooltipEvent::Hover(beijing));
    assert_eq!(machine.visible_waypoint(), Some(italy));
    machine.apply(TooltipEvent::RunnerClick);
    assert!(machine.runner_pinned());
    machine.apply(TooltipEvent::DocumentClick);
    assert_eq!(machine.visible(), None);
}
