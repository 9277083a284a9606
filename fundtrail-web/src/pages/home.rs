use fundtrail_core::ProgressData;
use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::fundraising_summary::FundraisingSummary;
use crate::components::podcast_feed::PodcastFeed;
use crate::components::reveal::Reveal;
use crate::components::route_tracker::RouteTracker;
use crate::components::substack_feed::SubstackFeed;
use crate::components::typewriter::Typewriter;
use crate::site;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    /// Render with these numbers instead of fetching.
    #[prop_or_default]
    pub preloaded: Option<ProgressData>,
}

#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    html! {
        <>
            <section class="hero" aria-labelledby="hero-title">
                <h1 id="hero-title">
                    <Typewriter text={site::TAGLINE} />
                </h1>
                <CountdownTimer />
                <FundraisingSummary preloaded={p.preloaded} />
            </section>
            <Reveal class="home__tracker">
                <RouteTracker preloaded={p.preloaded} />
            </Reveal>
            <Reveal class="home__feeds">
                <PodcastFeed />
                <SubstackFeed />
            </Reveal>
        </>
    }
}
