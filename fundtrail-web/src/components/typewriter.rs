use fundtrail_core::TypewriterSchedule;
use yew::prelude::*;

use crate::hooks::use_motion_allowed;
use crate::{dom, platform};

pub const COMPLETE_CLASS: &str = "typing-complete";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Whether every character of `text` is on screen.
fn typing_finished(
    schedule: &TypewriterSchedule,
    text: &str,
    elapsed_ms: u64,
    reduced: bool,
) -> bool {
    schedule.visible_chars(text, elapsed_ms, reduced) == text.chars().count()
}

/// Types `text` out one character at a time; the full text is always the accessible name.
#[function_component(Typewriter)]
pub fn typewriter(p: &Props) -> Html {
    let motion_allowed = use_motion_allowed();
    let schedule = TypewriterSchedule::default();
    let elapsed = use_state_eq(|| 0_u64);
    let ticker = use_mut_ref(|| None::<dom::Interval>);

    {
        let elapsed = elapsed.clone();
        let ticker = ticker.clone();
        use_effect_with((p.text.clone(), motion_allowed), move |(text, motion_allowed)| {
            elapsed.set(0);
            *ticker.borrow_mut() = if *motion_allowed {
                let total = schedule.total_ms(text);
                let started = platform::now_ms();
                dom::Interval::start(
                    u32::try_from(schedule.char_delay_ms).unwrap_or(u32::MAX),
                    move || {
                        let since = u64::try_from(platform::now_ms() - started).unwrap_or(0);
                        elapsed.set(since.min(total));
                    },
                )
            } else {
                None
            };
            move || drop(ticker.borrow_mut().take())
        });
    }

    let complete = typing_finished(&schedule, &p.text, *elapsed, !motion_allowed);
    {
        // Stopped from an effect, never from inside the interval's own closure.
        let ticker = ticker.clone();
        use_effect_with(complete, move |complete| {
            if *complete {
                drop(ticker.borrow_mut().take());
            }
            || ()
        });
    }

    let shown = schedule.visible_chars(&p.text, *elapsed, !motion_allowed);
    let class = classes!(
        "typewriter",
        p.class.clone(),
        complete.then_some(COMPLETE_CLASS)
    );
    html! {
        <span class={class} aria-label={p.text.clone()}>
            <span aria-hidden="true">{ TypewriterSchedule::prefix(&p.text, shown).to_string() }</span>
        </span>
    }
}
