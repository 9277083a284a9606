use fundtrail_core::progress::{overfund_message, tracker_announcement};
use fundtrail_core::waypoints::{TRACKER_LABELS, TrackerLabel};
use fundtrail_core::{Direction, ProgressData, RouteEnds};
use yew::prelude::*;

use crate::hooks::LoadState;
use crate::site;

pub(super) const UNAVAILABLE_TEXT: &str = "Data temporarily unavailable";

pub(super) struct TrackerView<'a> {
    pub state: &'a LoadState<ProgressData>,
    pub direction: Direction,
    pub is_mobile: bool,
    pub svg_markup: Option<AttrValue>,
    pub bar_ref: &'a NodeRef,
}

/// Plain bar used until (or instead of) the route artwork.
fn fallback_bar(direction: Direction) -> Html {
    let (d, start_x) = match direction {
        Direction::RightToLeft => ("M 98 6 L 2 6", "98"),
        Direction::LeftToRight => ("M 2 6 L 98 6", "2"),
    };
    html! {
        <svg class="route-tracker__svg" viewBox="0 0 100 12" preserveAspectRatio="none" aria-hidden="true" focusable="false">
            <path class="route-locked" d={d} />
            <path class="route-unlocked" d={d} />
            <circle class="progress-indicator" r="1.5" cx={start_x} cy="6" />
        </svg>
    }
}

pub(super) fn label_style(label: &TrackerLabel, direction: Direction) -> String {
    let edge = match direction {
        Direction::RightToLeft => "right",
        Direction::LeftToRight => "left",
    };
    format!("{edge}: {}%", label.position)
}

fn render_labels(funded_km: f64, direction: Direction) -> Html {
    html! {
        <ol class="route-tracker__labels">
            { for TRACKER_LABELS.iter().map(|label| {
                let class = classes!(
                    "route-tracker__label",
                    label.is_reached(funded_km).then_some("route-tracker__label--reached"),
                );
                html! {
                    <li class={class} style={label_style(label, direction)}>
                        { label.name }
                    </li>
                }
            }) }
        </ol>
    }
}

fn render_ready(view: &TrackerView<'_>, data: &ProgressData) -> Html {
    let artwork = view.svg_markup.clone().map_or_else(
        || fallback_bar(view.direction),
        Html::from_html_unchecked,
    );
    let value_text = format!(
        "{} of {} km funded",
        data.formatted_funded(),
        data.formatted_total()
    );
    html! {
        <>
            <p class="route-tracker__stats">
                <span class="route-tracker__funded">{ data.formatted_funded() }</span>
                { " / " }
                <span class="route-tracker__total">{ data.formatted_total() }</span>
                { " km funded" }
            </p>
            <div
                ref={view.bar_ref.clone()}
                class="route-tracker__bar"
                role="progressbar"
                aria-label="Route funded"
                aria-valuemin="0"
                aria-valuenow={data.funded_km.to_string()}
                aria-valuemax={data.total_km.to_string()}
                aria-valuetext={value_text}
            >
                { artwork }
            </div>
            if view.is_mobile {
                { render_labels(data.funded_km, view.direction) }
            }
            if let Some(message) = overfund_message(data) {
                <p class="route-tracker__bonus">{ message }</p>
            }
        </>
    }
}

pub(super) fn render(view: &TrackerView<'_>) -> Html {
    let layout = if view.is_mobile { "mobile" } else { "desktop" };
    let (body, announcement) = match view.state {
        LoadState::Loading => (
            html! {
                <div class="route-tracker__skeleton" aria-busy="true">
                    <span class="sr-only">{ "Loading route progress" }</span>
                </div>
            },
            String::new(),
        ),
        LoadState::Unavailable(_) => (
            html! { <p class="route-tracker__unavailable">{ UNAVAILABLE_TEXT }</p> },
            UNAVAILABLE_TEXT.to_string(),
        ),
        LoadState::Ready { value, cached } => {
            let ends = RouteEnds {
                direction: view.direction,
                ..RouteEnds::default()
            };
            (
                render_ready(view, value),
                tracker_announcement(value, &ends, *cached),
            )
        }
    };
    html! {
        <section class={classes!("route-tracker", format!("route-tracker--{layout}"))} aria-labelledby="route-tracker-title">
            <h2 id="route-tracker-title" class="route-tracker__title">{ "The route so far" }</h2>
            { body }
            <div id={site::TRACKER_LIVE_REGION} class="sr-only" aria-live="polite" aria-atomic="true">
                { announcement }
            </div>
        </section>
    }
}
