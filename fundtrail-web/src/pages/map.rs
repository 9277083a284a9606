use fundtrail_core::ProgressData;
use yew::prelude::*;

use crate::components::interactive_map::InteractiveMap;

#[derive(Properties, PartialEq, Clone)]
pub struct MapPageProps {
    #[prop_or_default]
    pub preloaded: Option<ProgressData>,
}

#[function_component(MapPage)]
pub fn map_page(p: &MapPageProps) -> Html {
    html! {
        <section class="panel map-page" aria-labelledby="map-page-title">
            <h1 id="map-page-title">{ "Vladivostok to Cabo da Roca" }</h1>
            <p class="map-page__intro">
                { "Every funded kilometre moves the runner further west. Tap a city to learn more." }
            </p>
            <InteractiveMap preloaded={p.preloaded} />
        </section>
    }
}
