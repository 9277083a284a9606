use yew::prelude::*;

use crate::a11y;
use crate::hooks::{MotionChange, MotionContext};
use crate::platform::campaign;

/// Switch between animated and still presentation.
#[function_component(MotionToggle)]
pub fn motion_toggle() -> Html {
    let context = use_context::<MotionContext>();
    let standalone = use_state(a11y::motion_allowed);
    let allowed = context.as_ref().map_or(*standalone, |ctx| ctx.allowed);

    let change = {
        let context = context.clone();
        Callback::from(move |change: MotionChange| {
            if let Some(ctx) = &context {
                ctx.change.emit(change);
                return;
            }
            let settings = campaign().motion();
            let next = match change {
                MotionChange::Toggle => settings.toggle(*standalone),
                MotionChange::Enable => settings.enable(),
                MotionChange::Disable => settings.disable(),
                MotionChange::Auto => settings.set_auto(crate::dom::prefers_reduced_motion()),
            };
            a11y::apply_motion_preference(next);
            standalone.set(next);
        })
    };
    let on_toggle = {
        let change = change.clone();
        Callback::from(move |_: MouseEvent| change.emit(MotionChange::Toggle))
    };
    let on_auto = Callback::from(move |_: MouseEvent| change.emit(MotionChange::Auto));

    html! {
        <div class="motion-toggle">
            <button
                type="button"
                class="motion-toggle__switch"
                aria-pressed={allowed.to_string()}
                onclick={on_toggle}
            >
                { if allowed { "Reduce motion" } else { "Allow motion" } }
            </button>
            <button type="button" class="motion-toggle__auto" onclick={on_auto}>
                { "Follow system setting" }
            </button>
        </div>
    }
}
