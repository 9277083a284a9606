use fundtrail_core::ProgressData;
use yew::prelude::*;

use crate::hooks::use_fundraising;
use crate::site;

fn default_data_url() -> AttrValue {
    AttrValue::Static(site::DATA_URL)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_else(default_data_url)]
    pub data_url: AttrValue,
    #[prop_or_default]
    pub preloaded: Option<ProgressData>,
}

/// Funded/total headline with a thin progress bar and a refresh button.
#[function_component(FundraisingSummary)]
pub fn fundraising_summary(p: &Props) -> Html {
    let handle = use_fundraising(p.data_url.clone(), p.preloaded);
    let view = &handle.view;
    let on_refresh = {
        let refresh = handle.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };
    html! {
        <section class="fundraising-summary" aria-busy={view.is_loading.to_string()}>
            <p class="fundraising-summary__figures">
                <span class="fundraising-summary__funded">{ view.formatted_funded() }</span>
                { " of " }
                <span class="fundraising-summary__total">{ view.formatted_total() }</span>
                { " km funded" }
            </p>
            <div class="fundraising-summary__track" aria-hidden="true">
                <div
                    class="fundraising-summary__fill"
                    style={format!("width: {}%", view.display_progress())}
                ></div>
            </div>
            if let Some(error) = &view.error {
                <p class="fundraising-summary__error" role="status">{ error.clone() }</p>
            }
            if view.cached {
                <p class="fundraising-summary__note">{ "Showing saved figures" }</p>
            }
            <button
                type="button"
                class="fundraising-summary__refresh"
                onclick={on_refresh}
                disabled={view.is_loading}
            >
                { "Refresh" }
            </button>
        </section>
    }
}
