use fundtrail_core::SubstackPost;
use yew::prelude::*;

use crate::hooks::{LoadState, use_substack};
use crate::site;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub preloaded: Option<Vec<SubstackPost>>,
}

fn render_post(post: &SubstackPost) -> Html {
    html! {
        <li class="substack-post">
            <a class="substack-post__title" href={post.link.clone()} target="_blank" rel="noopener noreferrer">
                { post.title.clone() }
            </a>
            <time class="substack-post__date" datetime={post.pub_date.clone()}>{ post.formatted_date.clone() }</time>
            <p class="substack-post__excerpt">{ post.description.clone() }</p>
        </li>
    }
}

#[function_component(SubstackFeed)]
pub fn substack_feed(p: &Props) -> Html {
    let state = use_substack(p.preloaded.clone());
    let body = match &state {
        LoadState::Loading => html! { <p class="feed__loading" aria-busy="true">{ "Loading posts" }</p> },
        LoadState::Unavailable(message) => html! { <p class="feed__error">{ message.clone() }</p> },
        LoadState::Ready { value, .. } => html! {
            <ul class="substack-feed__posts">
                { for value.iter().map(render_post) }
            </ul>
        },
    };
    html! {
        <section class="substack-feed" aria-labelledby="substack-feed-title">
            <h2 id="substack-feed-title">{ "From the road" }</h2>
            { body }
            <a class="feed__more-link" href={site::SUBSTACK_URL} target="_blank" rel="noopener noreferrer">
                { "Read on Substack" }
            </a>
        </section>
    }
}
