use fundtrail_core::Countdown;
use fundtrail_core::countdown::parse_target;
use yew::prelude::*;

use crate::{dom, platform, site};

const TICK_MS: u32 = 1_000;

fn default_target() -> AttrValue {
    AttrValue::Static(site::LAUNCH_DATE)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// RFC 3339 instant to count down to.
    #[prop_or_else(default_target)]
    pub target: AttrValue,
    /// Freeze the clock at this epoch-millisecond instant.
    #[prop_or_default]
    pub now_ms: Option<i64>,
}

fn unit(value: String, label: &'static str) -> Html {
    html! {
        <div class="countdown__unit">
            <span class="countdown__value">{ value }</span>
            <span class="countdown__label">{ label }</span>
        </div>
    }
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(p: &Props) -> Html {
    let fixed_now = p.now_ms;
    let now = use_state_eq(move || fixed_now.unwrap_or_else(platform::now_ms));
    let target = parse_target(&p.target);
    let remaining = target.map(|target| Countdown::until(target, *now));
    let complete = remaining.is_some_and(|r| r.complete);

    {
        let now = now.clone();
        let ticking = fixed_now.is_none() && target.is_some() && !complete;
        use_effect_with(ticking, move |ticking| {
            let interval = if *ticking {
                dom::Interval::start(TICK_MS, move || now.set(platform::now_ms()))
            } else {
                None
            };
            move || drop(interval)
        });
    }

    let Some(remaining) = remaining else {
        log::warn!("countdown target {} is not an RFC 3339 date", p.target);
        return html! {};
    };
    if remaining.complete {
        return html! {
            <p class="countdown countdown--complete" role="status">{ "The run is under way" }</p>
        };
    }
    let text = remaining.formatted();
    let label = format!(
        "{} days, {} hours, {} minutes and {} seconds to go",
        text.days, text.hours, text.minutes, text.seconds
    );
    html! {
        <div class="countdown" role="timer" aria-label={label}>
            { unit(text.days, "days") }
            { unit(text.hours, "hours") }
            { unit(text.minutes, "minutes") }
            { unit(text.seconds, "seconds") }
        </div>
    }
}
