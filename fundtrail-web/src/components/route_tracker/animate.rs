//! Stroke and indicator updates for the injected route artwork.

use fundtrail_core::Tween;
use fundtrail_core::progress::{StrokeReveal, stroke_reveal};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, SvgElement, SvgGeometryElement};
use yew::NodeRef;

use crate::dom;

pub(super) const UNLOCKED_SELECTOR: &str = ".route-unlocked";
pub(super) const INDICATOR_SELECTOR: &str = ".progress-indicator";

/// CSS transition matching the cubic ease-out used everywhere else.
pub(super) fn dash_transition(duration_ms: f64) -> String {
    format!("stroke-dashoffset {duration_ms}ms cubic-bezier(0.33, 1, 0.68, 1)")
}

fn set_style(element: &Element, property: &str, value: &str) {
    let style = element
        .dyn_ref::<SvgElement>()
        .map(SvgElement::style)
        .or_else(|| element.dyn_ref::<HtmlElement>().map(HtmlElement::style));
    if let Some(style) = style
        && let Err(err) = style.set_property(property, value)
    {
        log::warn!("setting {property} failed: {}", dom::js_error_message(&err));
    }
}

fn place_indicator(path: &SvgGeometryElement, indicator: &Element, length: f64) {
    #[allow(clippy::cast_possible_truncation)]
    let Ok(point) = path.get_point_at_length(length as f32) else {
        return;
    };
    let _ = indicator.set_attribute("cx", &point.x().to_string());
    let _ = indicator.set_attribute("cy", &point.y().to_string());
}

fn apply_stroke(path: &SvgGeometryElement, reveal: &StrokeReveal, transition: Option<String>) {
    set_style(path, "stroke-dasharray", &reveal.dash_array.to_string());
    set_style(path, "transition", transition.as_deref().unwrap_or("none"));
    set_style(path, "stroke-dashoffset", &reveal.dash_offset.to_string());
}

/// Reveal `percent` of the route inside `bar`.
///
/// Returns the running indicator loop, if the animation is not instant.
pub(super) fn reveal_progress(
    bar: &NodeRef,
    percent: f64,
    duration_ms: f64,
    reduced_motion: bool,
) -> Option<dom::FrameLoop> {
    let bar = bar.cast::<Element>()?;
    let path = bar
        .query_selector(UNLOCKED_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<SvgGeometryElement>()
        .ok()?;
    let indicator = bar.query_selector(INDICATOR_SELECTOR).ok().flatten();

    let length = f64::from(path.get_total_length());
    let target = stroke_reveal(length, percent);

    if reduced_motion || duration_ms <= 0.0 {
        apply_stroke(&path, &target, None);
        if let Some(indicator) = &indicator {
            place_indicator(&path, indicator, target.indicator_length);
        }
        return None;
    }

    // Start fully hidden, then let the transition run to the target.
    apply_stroke(&path, &stroke_reveal(length, 0.0), None);
    // A layout read flushes styles so the transition starts from zero.
    let _ = path.get_bounding_client_rect();
    apply_stroke(&path, &target, Some(dash_transition(duration_ms)));

    let indicator = indicator?;
    let tween = Tween::new(0.0, target.indicator_length, duration_ms);
    dom::FrameLoop::start(move |elapsed| {
        place_indicator(&path, &indicator, tween.sample(elapsed));
        !tween.is_complete(elapsed)
    })
}
