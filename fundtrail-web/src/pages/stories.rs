use fundtrail_core::{PodcastEpisode, SubstackPost};
use yew::prelude::*;

use crate::components::podcast_feed::PodcastFeed;
use crate::components::substack_feed::SubstackFeed;

#[derive(Properties, PartialEq, Clone)]
pub struct StoriesPageProps {
    #[prop_or_default]
    pub episodes: Option<Vec<PodcastEpisode>>,
    #[prop_or_default]
    pub posts: Option<Vec<SubstackPost>>,
}

#[function_component(StoriesPage)]
pub fn stories_page(p: &StoriesPageProps) -> Html {
    html! {
        <section class="panel stories-page">
            <h1>{ "Stories from the road" }</h1>
            <SubstackFeed preloaded={p.posts.clone()} />
            <PodcastFeed preloaded={p.episodes.clone()} />
        </section>
    }
}
