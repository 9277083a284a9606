use yew::prelude::*;

use crate::site;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{ site::TAGLINE }</p>
            <nav aria-label="Elsewhere">
                <a href={site::PODCAST_SHOW_URL} target="_blank" rel="noopener noreferrer">{ "Podcast" }</a>
                <a href={site::SUBSTACK_URL} target="_blank" rel="noopener noreferrer">{ "Newsletter" }</a>
            </nav>
        </footer>
    }
}
