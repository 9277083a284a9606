use fundtrail_core::format::group_thousands;
use fundtrail_core::path::MAP_ROUTE_PATH;
use fundtrail_core::progress::map_announcement;
use fundtrail_core::tooltip::Visible;
use fundtrail_core::waypoints::{self, MAP_WAYPOINTS, WaypointId};
use fundtrail_core::{
    ProgressData, RoutePath, RunnerAnimation, RunnerFrame, TooltipEvent, TooltipMachine, Waypoint,
};
use yew::prelude::*;

use super::MapRefs;
use crate::hooks::LoadState;
use crate::{paths, site};

pub(super) const RUNNER_DISCLAIMER: &str =
    "Position reflects funded kilometres, not a live GPS location.";

pub(super) struct MapView<'a> {
    pub state: &'a LoadState<ProgressData>,
    pub tooltip: TooltipMachine,
    pub route: Option<&'a RoutePath>,
    pub refs: &'a MapRefs,
    pub motion_allowed: bool,
    pub on_event: Callback<TooltipEvent>,
}

pub(super) fn tooltip_id(waypoint: &Waypoint) -> String {
    format!("waypoint-tooltip-{}", waypoint.id)
}

/// Where the runner comes to rest.
pub(super) fn target_frame(route: &RoutePath, data: &ProgressData) -> RunnerFrame {
    RunnerAnimation::new(route.clone(), data.visual_percent(), 0.0, true).frame(0.0)
}

/// Where the runner sits before the first frame: the start while an
/// animation is pending, the target otherwise.
pub(super) fn initial_frame(
    route: &RoutePath,
    data: &ProgressData,
    motion_allowed: bool,
) -> RunnerFrame {
    if motion_allowed {
        RunnerFrame {
            position: route.start(),
        }
    } else {
        target_frame(route, data)
    }
}

/// Events a waypoint marker sends for each kind of pointer or focus input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WaypointEvents {
    pub enter: TooltipEvent,
    pub leave: TooltipEvent,
    pub click: TooltipEvent,
    pub touch: TooltipEvent,
}

impl WaypointEvents {
    pub(super) const fn for_id(id: WaypointId) -> Self {
        Self {
            enter: TooltipEvent::Hover(id),
            leave: TooltipEvent::Leave(id),
            click: TooltipEvent::WaypointClick(id),
            touch: TooltipEvent::Touch(id),
        }
    }
}

fn render_waypoint(waypoint: &Waypoint, funded_km: f64, view: &MapView<'_>) -> Html {
    let reached = waypoint.is_reached(funded_km);
    let pinned = view.tooltip.is_pinned(waypoint.id);
    let showing = view.tooltip.visible_waypoint() == Some(waypoint.id);
    let events = WaypointEvents::for_id(waypoint.id);
    let emit = |event: TooltipEvent| {
        let on_event = view.on_event.clone();
        move || on_event.emit(event)
    };
    let onmouseenter = {
        let fire = emit(events.enter);
        Callback::from(move |_: MouseEvent| fire())
    };
    let onmouseleave = {
        let fire = emit(events.leave);
        Callback::from(move |_: MouseEvent| fire())
    };
    let onfocus = {
        let fire = emit(events.enter);
        Callback::from(move |_: FocusEvent| fire())
    };
    let onblur = {
        let fire = emit(events.leave);
        Callback::from(move |_: FocusEvent| fire())
    };
    let onclick = {
        let fire = emit(events.click);
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            fire();
        })
    };
    let ontouchstart = {
        let fire = emit(events.touch);
        Callback::from(move |e: TouchEvent| {
            e.stop_propagation();
            fire();
        })
    };
    let class = classes!(
        "waypoint",
        reached.then_some("waypoint--reached"),
        pinned.then_some("waypoint--pinned"),
    );
    html! {
        <button
            type="button"
            class={class}
            style={format!("left: {}%; top: {}%", waypoint.x, waypoint.y)}
            aria-label={waypoint.aria_label()}
            aria-expanded={showing.to_string()}
            aria-describedby={showing.then(|| tooltip_id(waypoint))}
            data-waypoint={waypoint.id.0}
            {onmouseenter}
            {onmouseleave}
            {onfocus}
            {onblur}
            {onclick}
            {ontouchstart}
        >
            <span class="waypoint__dot" aria-hidden="true"></span>
        </button>
    }
}

fn render_waypoint_tooltip(waypoint: &Waypoint, pinned: bool) -> Html {
    let class = classes!("map-tooltip", pinned.then_some("map-tooltip--pinned"));
    html! {
        <div
            id={tooltip_id(waypoint)}
            role="tooltip"
            class={class}
            style={format!("left: {}%; top: {}%", waypoint.x, waypoint.y)}
        >
            <strong class="map-tooltip__title">{ waypoint.name }</strong>
            <span class="map-tooltip__country">{ waypoint.country }</span>
            <span class="map-tooltip__distance">{ waypoint.distance_label() }</span>
            <p class="map-tooltip__info">{ waypoint.info }</p>
        </div>
    }
}

fn render_runner_tooltip(data: &ProgressData, frame: &RunnerFrame) -> Html {
    html! {
        <div
            id="runner-tooltip"
            role="tooltip"
            class="map-tooltip map-tooltip--runner map-tooltip--pinned"
            style={format!("left: {}; top: {}", frame.left(), frame.top())}
        >
            <strong class="map-tooltip__title">{ format!("{} km", data.formatted_funded()) }</strong>
            <span class="map-tooltip__distance">{ "funded so far" }</span>
            <p class="map-tooltip__info">{ RUNNER_DISCLAIMER }</p>
        </div>
    }
}

fn render_stage(view: &MapView<'_>, data: &ProgressData) -> Html {
    let frame = view.route.map(|route| initial_frame(route, data, view.motion_allowed));
    let resting = view.route.map(|route| target_frame(route, data));
    let runner_pinned = view.tooltip.runner_pinned();
    let onclick = {
        let on_event = view.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_event.emit(TooltipEvent::RunnerClick);
        })
    };
    let counter_start = if view.motion_allowed {
        "0".to_string()
    } else {
        data.formatted_funded()
    };
    let tooltip = match view.tooltip.visible() {
        Some(Visible::Waypoint(id)) => waypoints::find(id).map_or_else(Html::default, |wp| {
            render_waypoint_tooltip(wp, view.tooltip.is_pinned(id))
        }),
        Some(Visible::Runner) => resting
            .as_ref()
            .map_or_else(Html::default, |frame| render_runner_tooltip(data, frame)),
        None => Html::default(),
    };

    html! {
        <>
            <div class="interactive-map__stage">
                <img
                    class="interactive-map__image"
                    src={paths::asset_path(site::MAP_IMAGE)}
                    alt={site::MAP_IMAGE_ALT}
                    loading="lazy"
                />
                <div
                    ref={view.refs.overlay.clone()}
                    class="interactive-map__overlay"
                    style={frame.as_ref().map(|f| format!("clip-path: {}", f.clip_path()))}
                    aria-hidden="true"
                ></div>
                <svg class="interactive-map__route" viewBox="0 0 100 100" preserveAspectRatio="none" aria-hidden="true" focusable="false">
                    <path d={MAP_ROUTE_PATH} fill="none" />
                </svg>
                { for MAP_WAYPOINTS.iter().map(|wp| render_waypoint(wp, data.funded_km, view)) }
                if let Some(frame) = &frame {
                    <button
                        ref={view.refs.runner.clone()}
                        type="button"
                        class={classes!("interactive-map__runner", runner_pinned.then_some("interactive-map__runner--pinned"))}
                        style={format!("left: {}; top: {}", frame.left(), frame.top())}
                        aria-label={format!("Runner: {} km funded", data.formatted_funded())}
                        aria-expanded={runner_pinned.to_string()}
                        {onclick}
                    >
                        <span class="interactive-map__runner-icon" aria-hidden="true"></span>
                    </button>
                }
                { tooltip }
            </div>
            <p class="interactive-map__counter">
                <span ref={view.refs.counter.clone()} class="interactive-map__funded">{ counter_start }</span>
                { format!(" of {} km funded", group_thousands(data.total_km)) }
            </p>
        </>
    }
}

pub(super) fn render(view: &MapView<'_>) -> Html {
    let (body, announcement) = match view.state {
        LoadState::Loading => (
            html! {
                <div class="interactive-map__skeleton" aria-busy="true">
                    <span class="sr-only">{ "Loading the route map" }</span>
                </div>
            },
            String::new(),
        ),
        LoadState::Unavailable(_) => (
            html! { <p class="interactive-map__unavailable">{ "Data temporarily unavailable" }</p> },
            String::new(),
        ),
        LoadState::Ready { value, cached } => {
            (render_stage(view, value), map_announcement(value, *cached))
        }
    };
    html! {
        <section class="interactive-map" aria-labelledby="interactive-map-title">
            <h2 id="interactive-map-title" class="interactive-map__title">{ "Follow the run" }</h2>
            { body }
            <div id={site::MAP_LIVE_REGION} class="sr-only" aria-live="polite" aria-atomic="true">
                { announcement }
            </div>
        </section>
    }
}
