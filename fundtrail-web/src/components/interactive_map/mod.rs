mod view;

use std::rc::Rc;

use fundtrail_core::animation::MAP_ANIMATION_MS;
use fundtrail_core::format::group_thousands;
use fundtrail_core::progress::DEFAULT_TOTAL_KM;
use fundtrail_core::waypoints::WaypointId;
use fundtrail_core::{
    Counter, ProgressData, RoutePath, RunnerAnimation, RunnerFrame, TooltipEvent, TooltipMachine,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::dom;
use crate::hooks::{ProgressFeed, use_motion_allowed, use_progress};
use crate::site;

fn default_data_url() -> AttrValue {
    AttrValue::Static(site::DATA_URL)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_else(default_data_url)]
    pub data_url: AttrValue,
    #[prop_or(DEFAULT_TOTAL_KM)]
    pub total_km: f64,
    #[prop_or(MAP_ANIMATION_MS)]
    pub animation_duration_ms: f64,
    #[prop_or_default]
    pub preloaded: Option<ProgressData>,
}

/// Tooltip pin state as a Yew reducer.
///
/// Touch listeners are passive, so the browser still emulates a click after a
/// tap; the first click on the waypoint just touched is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipState {
    pub machine: TooltipMachine,
    touched: Option<WaypointId>,
}

impl TooltipState {
    fn next(self, action: TooltipEvent) -> Self {
        match action {
            TooltipEvent::WaypointClick(id) if self.touched == Some(id) => Self {
                touched: None,
                ..self
            },
            TooltipEvent::Hover(_) | TooltipEvent::Leave(_) => Self {
                machine: self.machine.on(action),
                ..self
            },
            TooltipEvent::Touch(id) => Self {
                machine: self.machine.on(action),
                touched: Some(id),
            },
            _ => Self {
                machine: self.machine.on(action),
                touched: None,
            },
        }
    }
}

impl Reducible for TooltipState {
    type Action = TooltipEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Marker elements moved on every animation frame.
#[derive(Clone, Default, PartialEq)]
pub(crate) struct MapRefs {
    pub runner: NodeRef,
    pub overlay: NodeRef,
    pub counter: NodeRef,
}

fn set_style(node: &NodeRef, property: &str, value: &str) {
    if let Some(el) = node.cast::<HtmlElement>()
        && let Err(err) = el.style().set_property(property, value)
    {
        log::warn!("setting {property} failed: {}", dom::js_error_message(&err));
    }
}

fn apply_frame(refs: &MapRefs, frame: &RunnerFrame, funded_shown: f64) {
    set_style(&refs.runner, "left", &frame.left());
    set_style(&refs.runner, "top", &frame.top());
    set_style(&refs.overlay, "clip-path", &frame.clip_path());
    if let Some(counter) = refs.counter.cast::<Element>() {
        counter.set_text_content(Some(&group_thousands(funded_shown)));
    }
}

/// Run the runner and counter to their targets; `None` when applied in one step.
fn animate_runner(
    refs: MapRefs,
    route: RoutePath,
    data: ProgressData,
    duration_ms: f64,
    reduced_motion: bool,
) -> Option<dom::FrameLoop> {
    let runner = RunnerAnimation::new(route, data.visual_percent(), duration_ms, reduced_motion);
    let counter = Counter::new(data.funded_km, duration_ms, reduced_motion);
    if runner.is_complete(0.0) {
        apply_frame(&refs, &runner.frame(0.0), counter.value(0.0));
        return None;
    }
    dom::FrameLoop::start(move |elapsed| {
        apply_frame(&refs, &runner.frame(elapsed), counter.value(elapsed));
        !(runner.is_complete(elapsed) && counter.is_complete(elapsed))
    })
}

/// Any click that reaches the document clears the pins.
fn listen_for_outside_clicks(dispatch: UseReducerDispatcher<TooltipState>) -> impl FnOnce() {
    let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
        dispatch.dispatch(TooltipEvent::DocumentClick);
    }) as Box<dyn FnMut(web_sys::Event)>);
    let doc = dom::document();
    if let Some(doc) = &doc
        && let Err(err) =
            doc.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
    {
        dom::console_error(&format!(
            "Failed to listen for clicks: {}",
            dom::js_error_message(&err)
        ));
    }
    move || {
        if let Some(doc) = doc {
            let _ = doc
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

#[function_component(InteractiveMap)]
pub fn interactive_map(p: &Props) -> Html {
    let motion_allowed = use_motion_allowed();
    let progress = use_progress(
        ProgressFeed::Map,
        p.data_url.clone(),
        p.total_km,
        p.preloaded,
    );
    let tooltip = use_reducer(TooltipState::default);
    let route = use_memo((), |()| match RoutePath::map_route() {
        Ok(route) => Some(route),
        Err(err) => {
            dom::console_error(&format!("Map route failed to parse: {err}"));
            None
        }
    });
    let refs = use_memo((), |()| MapRefs::default());

    {
        let dispatch = tooltip.dispatcher();
        use_effect_with((), move |()| listen_for_outside_clicks(dispatch));
    }

    let data = progress.state.value().copied();
    {
        let refs = (*refs).clone();
        let route = (*route).clone();
        let duration = p.animation_duration_ms;
        use_effect_with((data, motion_allowed), move |(data, motion_allowed)| {
            let running = match (*data, route) {
                (Some(data), Some(route)) => {
                    animate_runner(refs, route, data, duration, !*motion_allowed)
                }
                _ => None,
            };
            move || drop(running)
        });
    }

    let on_event = {
        let dispatch = tooltip.dispatcher();
        Callback::from(move |event: TooltipEvent| dispatch.dispatch(event))
    };

    view::render(&view::MapView {
        state: &progress.state,
        tooltip: tooltip.machine,
        route: (*route).as_ref(),
        refs: &refs,
        motion_allowed,
        on_event,
    })
}
