use yew::prelude::*;

/// Shown when no route matches.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Off the route" }</h1>
            <p>{ "This page doesn't exist. The runner is still heading west." }</p>
            <button type="button" onclick={go_home}>
                { "Back to the start" }
            </button>
        </section>
    }
}
