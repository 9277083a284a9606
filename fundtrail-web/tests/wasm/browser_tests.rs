use fundtrail_core::{KeyValueStore, SensoryMode, keys};
use fundtrail_web::platform::LocalStore;
use fundtrail_web::{a11y, dom};
use wasm_bindgen_test::*;

fn clear_preference() {
    let _ = LocalStore.remove_item(keys::SENSORY_MODE);
}

#[wasm_bindgen_test]
fn window_and_storage_are_available() {
    assert!(dom::window().is_some());
    assert!(dom::local_storage().is_some());
}

#[wasm_bindgen_test]
fn local_store_round_trips() {
    LocalStore.set_item("fundtrail_test", "42").expect("write");
    assert_eq!(
        LocalStore.get_item("fundtrail_test").expect("read").as_deref(),
        Some("42")
    );
    LocalStore.remove_item("fundtrail_test").expect("remove");
    assert!(LocalStore.get_item("fundtrail_test").expect("read").is_none());
}

#[wasm_bindgen_test]
fn saved_preference_drives_the_root_attribute() {
    clear_preference();
    assert!(!a11y::motion_allowed());

    LocalStore
        .set_item(keys::SENSORY_MODE, SensoryMode::MotionAllowed.as_str())
        .expect("write");
    assert!(a11y::motion_allowed());
    a11y::apply_motion_preference(true);
    let html = dom::root_element().expect("html element");
    assert_eq!(
        html.get_attribute(a11y::MOTION_ATTRIBUTE).as_deref(),
        Some("true")
    );

    a11y::apply_motion_preference(false);
    assert!(html.get_attribute(a11y::MOTION_ATTRIBUTE).is_none());
    clear_preference();
}

#[wasm_bindgen_test]
fn announce_writes_into_the_live_region() {
    let doc = dom::document().expect("document");
    let region = doc.create_element("div").expect("div");
    region.set_id("test-live-region");
    doc.body().expect("body").append_child(&region).expect("append");
    a11y::announce("test-live-region", "12,000 of 20,000 kilometers funded");
    assert_eq!(
        region.text_content().as_deref(),
        Some("12,000 of 20,000 kilometers funded")
    );
    region.remove();
}
