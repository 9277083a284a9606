use fundtrail_core::{KeyValueStore, ProgressData, keys};
use fundtrail_web::hooks::LoadState;
use fundtrail_web::platform::{LocalStore, campaign, now_ms};
use fundtrail_web::router::Route;
use fundtrail_web::{a11y, dom, paths, site};
use yew_router::Routable;

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn dom_helpers_are_absent_off_browser() {
    assert!(dom::window().is_none());
    assert!(dom::document().is_none());
    assert!(dom::local_storage().is_none());
    assert!(!dom::prefers_reduced_motion());
    assert!(dom::Timeout::schedule(10, || {}).is_none());
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn motion_stays_off_without_a_browser() {
    assert!(!a11y::motion_allowed());
    assert!(a11y::saved_sensory_mode().is_none());
    a11y::apply_motion_preference(true);
    a11y::announce(site::TRACKER_LIVE_REGION, "ignored");
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn storage_failures_degrade_to_misses() {
    assert!(LocalStore.get_item(keys::FUNDRAISING).is_err());
    let cache = campaign().fundraising();
    assert!(cache.read_fresh().is_none());
    assert!(cache.write(&ProgressData::new(1.0, 2.0)).is_none());
    assert!(now_ms() > 0);
}

#[test]
fn site_assets_resolve_under_the_base_path() {
    assert!(paths::asset_path(site::TRACKER_DESKTOP_SVG).ends_with("/static/route-desktop.svg"));
    assert_eq!(paths::resolve_url(site::DATA_URL), site::DATA_URL);
    assert!(paths::resolve_url("data/progress.json").ends_with("/data/progress.json"));
}

#[test]
fn routes_cover_the_pages() {
    assert_eq!(Route::recognize("/map"), Some(Route::Map));
    assert_eq!(Route::Stories.to_path(), "/stories");
}

#[test]
fn load_state_exposes_values() {
    let ready = LoadState::ready(ProgressData::new(3.0, 4.0));
    assert_eq!(ready.value().map(|d| d.funded_km), Some(3.0));
    assert!(!ready.is_loading());
    let missing: LoadState<ProgressData> = LoadState::Unavailable("x".into());
    assert!(missing.value().is_none());
}

#[test]
fn focus_css_covers_screen_reader_text() {
    assert!(a11y::visible_focus_css().contains(".sr-only"));
}
