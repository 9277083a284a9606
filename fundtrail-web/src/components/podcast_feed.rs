use fundtrail_core::PodcastEpisode;
use fundtrail_core::feeds::podcast_shelf;
use yew::prelude::*;

use crate::hooks::{LoadState, use_podcast};
use crate::site;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub preloaded: Option<Vec<PodcastEpisode>>,
}

fn episode_meta(episode: &PodcastEpisode) -> Html {
    html! {
        <p class="podcast-episode__meta">
            if let Some(number) = episode.episode_number {
                <span class="podcast-episode__number">{ format!("Episode {number}") }</span>
            }
            <time datetime={episode.pub_date.clone()}>{ episode.formatted_date.clone() }</time>
            if !episode.duration.is_empty() {
                <span class="podcast-episode__duration">{ episode.duration.clone() }</span>
            }
        </p>
    }
}

fn render_latest(episode: &PodcastEpisode) -> Html {
    html! {
        <article class="podcast-episode podcast-episode--latest">
            <h3 class="podcast-episode__title">{ episode.title.clone() }</h3>
            { episode_meta(episode) }
            <p class="podcast-episode__description">{ episode.description.clone() }</p>
            if !episode.audio_url.is_empty() {
                <audio class="podcast-episode__player" controls="controls" preload="none" src={episode.audio_url.clone()}></audio>
            }
        </article>
    }
}

fn render_more(episode: &PodcastEpisode) -> Html {
    html! {
        <li class="podcast-episode">
            <h4 class="podcast-episode__title">{ episode.title.clone() }</h4>
            { episode_meta(episode) }
        </li>
    }
}

#[function_component(PodcastFeed)]
pub fn podcast_feed(p: &Props) -> Html {
    let state = use_podcast(p.preloaded.clone());
    let body = match &state {
        LoadState::Loading => html! { <p class="feed__loading" aria-busy="true">{ "Loading episodes" }</p> },
        LoadState::Unavailable(message) => html! { <p class="feed__error">{ message.clone() }</p> },
        LoadState::Ready { value, .. } => {
            let shelf = podcast_shelf(value);
            html! {
                <>
                    if let Some(latest) = shelf.latest {
                        { render_latest(latest) }
                    }
                    if !shelf.more.is_empty() {
                        <ul class="podcast-feed__more">
                            { for shelf.more.iter().map(render_more) }
                        </ul>
                    }
                </>
            }
        }
    };
    html! {
        <section class="podcast-feed" aria-labelledby="podcast-feed-title">
            <h2 id="podcast-feed-title">{ "Podcast" }</h2>
            { body }
            <a class="feed__more-link" href={site::PODCAST_SHOW_URL} target="_blank" rel="noopener noreferrer">
                { "All episodes" }
            </a>
        </section>
    }
}
