mod animate;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use fundtrail_core::animation::TRACKER_ANIMATION_MS;
use fundtrail_core::progress::DEFAULT_TOTAL_KM;
use fundtrail_core::{Direction, ProgressData};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{ProgressFeed, use_motion_allowed, use_progress};
use crate::{dom, net, paths, site};

pub(crate) const RESIZE_DEBOUNCE_MS: u32 = 250;
pub(crate) const DEFAULT_BREAKPOINT_PX: f64 = 768.0;

fn default_data_url() -> AttrValue {
    AttrValue::Static(site::DATA_URL)
}

fn default_desktop_svg() -> AttrValue {
    AttrValue::Static(site::TRACKER_DESKTOP_SVG)
}

fn default_mobile_svg() -> AttrValue {
    AttrValue::Static(site::TRACKER_MOBILE_SVG)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_else(default_data_url)]
    pub data_url: AttrValue,
    #[prop_or(DEFAULT_TOTAL_KM)]
    pub total_km: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_else(default_desktop_svg)]
    pub desktop_svg: AttrValue,
    #[prop_or_else(default_mobile_svg)]
    pub mobile_svg: AttrValue,
    #[prop_or(TRACKER_ANIMATION_MS)]
    pub animation_duration_ms: f64,
    #[prop_or(DEFAULT_BREAKPOINT_PX)]
    pub mobile_breakpoint: f64,
    /// Skip the network and render these numbers.
    #[prop_or_default]
    pub preloaded: Option<ProgressData>,
    /// Start in the mobile layout; otherwise the viewport decides.
    #[prop_or_default]
    pub mobile: Option<bool>,
}

pub(crate) fn is_mobile_width(width: Option<f64>, breakpoint: f64) -> bool {
    width.is_some_and(|w| w < breakpoint)
}

/// Which layout is on screen; the action is the latest `is_mobile` reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub mobile: bool,
}

impl Reducible for Layout {
    type Action = bool;

    fn reduce(self: Rc<Self>, mobile: bool) -> Rc<Self> {
        if self.mobile == mobile {
            self
        } else {
            Rc::new(Self { mobile })
        }
    }
}

/// Debounced `resize` listener that reports the current layout.
fn watch_viewport(breakpoint: f64, on_change: Callback<bool>) -> impl FnOnce() {
    let pending: Rc<RefCell<Option<dom::Timeout>>> = Rc::new(RefCell::new(None));
    let listener = {
        let pending = Rc::clone(&pending);
        Closure::wrap(Box::new(move || {
            let on_change = on_change.clone();
            let timer = dom::Timeout::schedule(RESIZE_DEBOUNCE_MS, move || {
                on_change.emit(is_mobile_width(dom::viewport_width(), breakpoint));
            });
            *pending.borrow_mut() = timer;
        }) as Box<dyn FnMut()>)
    };
    let win = dom::window();
    if let Some(win) = &win
        && let Err(err) =
            win.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
    {
        dom::console_error(&format!(
            "Failed to watch viewport: {}",
            dom::js_error_message(&err)
        ));
    }
    move || {
        if let Some(win) = win {
            let _ = win
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
        pending.borrow_mut().take();
    }
}

#[function_component(RouteTracker)]
pub fn route_tracker(p: &Props) -> Html {
    let motion_allowed = use_motion_allowed();
    let progress = use_progress(
        ProgressFeed::Tracker,
        p.data_url.clone(),
        p.total_km,
        p.preloaded,
    );

    let breakpoint = p.mobile_breakpoint;
    let forced_layout = p.mobile;
    let layout = use_reducer(move || Layout {
        mobile: forced_layout
            .unwrap_or_else(|| is_mobile_width(dom::viewport_width(), breakpoint)),
    });
    {
        let dispatch = layout.dispatcher();
        use_effect_with(breakpoint, move |breakpoint| {
            let on_change = Callback::from(move |mobile: bool| dispatch.dispatch(mobile));
            watch_viewport(*breakpoint, on_change)
        });
    }
    let is_mobile = layout.mobile;

    let svg_url = if is_mobile {
        p.mobile_svg.clone()
    } else {
        p.desktop_svg.clone()
    };
    let svg_markup = use_state(|| None::<AttrValue>);
    {
        let svg_markup = svg_markup.clone();
        use_effect_with(svg_url, move |url| {
            let url = paths::resolve_url(url);
            spawn_local(async move {
                match net::fetch_text(&url).await {
                    Ok(markup) => svg_markup.set(Some(AttrValue::from(markup))),
                    Err(err) => {
                        log::warn!("route artwork {url} unavailable, using the plain bar: {err}");
                        svg_markup.set(None);
                    }
                }
            });
            || ()
        });
    }

    let bar_ref = use_node_ref();
    let data = progress.state.value().copied();
    {
        let bar_ref = bar_ref.clone();
        let duration = p.animation_duration_ms;
        let deps = (
            data,
            svg_markup.is_some(),
            is_mobile,
            motion_allowed,
        );
        use_effect_with(deps, move |(data, _, _, motion_allowed)| {
            let running = (*data).and_then(|data| {
                animate::reveal_progress(&bar_ref, data.visual_percent(), duration, !*motion_allowed)
            });
            move || drop(running)
        });
    }

    view::render(&view::TrackerView {
        state: &progress.state,
        direction: p.direction,
        is_mobile,
        svg_markup: (*svg_markup).clone(),
        bar_ref: &bar_ref,
    })
}
