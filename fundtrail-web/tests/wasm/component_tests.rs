use fundtrail_core::ProgressData;
use fundtrail_web::components::interactive_map::{InteractiveMap, Props as MapProps};
use fundtrail_web::components::route_tracker::{Props as TrackerProps, RouteTracker};
use fundtrail_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::Renderer;

fn mount_point(id: &str) -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.set_inner_html("");
        return existing;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[wasm_bindgen_test]
async fn tracker_sets_the_stroke_for_preloaded_data() {
    let root = mount_point("tracker-root");
    let props = TrackerProps {
        preloaded: Some(ProgressData::new(10_000.0, 20_000.0)),
        mobile: Some(false),
        ..yew::props!(TrackerProps {})
    };
    Renderer::<RouteTracker>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let path = root
        .query_selector(".route-unlocked")
        .expect("query")
        .expect("unlocked path");
    let style = path.get_attribute("style").unwrap_or_default();
    assert!(style.contains("stroke-dashoffset"), "{style}");
    let live = root
        .query_selector("[aria-live='polite']")
        .expect("query")
        .expect("live region");
    assert!(
        live.text_content()
            .unwrap_or_default()
            .contains("50.0 percent complete")
    );
}

#[wasm_bindgen_test]
async fn map_waypoint_click_pins_and_document_click_clears() {
    let root = mount_point("map-root");
    let props = MapProps {
        preloaded: Some(ProgressData::new(12_000.0, 20_000.0)),
        ..yew::props!(MapProps {})
    };
    Renderer::<InteractiveMap>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let button: web_sys::HtmlElement = root
        .query_selector("[data-waypoint='beijing']")
        .expect("query")
        .expect("beijing marker")
        .dyn_into()
        .expect("button");
    button.click();
    settle().await;
    assert!(root.query_selector("#waypoint-tooltip-beijing").expect("query").is_some());

    dom::document()
        .and_then(|doc| doc.body())
        .expect("body")
        .click();
    settle().await;
    assert!(root.query_selector("[role='tooltip']").expect("query").is_none());
}
