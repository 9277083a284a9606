use fundtrail_core::{PodcastEpisode, ProgressData, SubstackPost};
use fundtrail_web::pages::{
    home::{HomePage, HomePageProps},
    map::{MapPage, MapPageProps},
    not_found::{NotFound, Props as NotFoundProps},
    stories::{StoriesPage, StoriesPageProps},
};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn episode(title: &str, number: usize) -> PodcastEpisode {
    PodcastEpisode {
        title: title.to_string(),
        description: "Notes...".to_string(),
        audio_url: String::new(),
        duration: "12:00".to_string(),
        pub_date: "2026-04-02 08:00:00".to_string(),
        formatted_date: "Apr 2, 2026".to_string(),
        episode_number: Some(number),
    }
}

#[test]
fn home_page_renders_every_section() {
    let props = HomePageProps {
        preloaded: Some(ProgressData::new(12_000.0, 20_000.0)),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("hero-title"), "{html}");
    assert!(html.contains("fundraising-summary"));
    assert!(html.contains("route-tracker"));
    assert!(html.contains("60.0 percent complete"));
    assert!(html.contains("podcast-feed"));
    assert!(html.contains("substack-feed"));
}

#[test]
fn home_page_without_data_shows_skeletons() {
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(HomePageProps { preloaded: None }).render(),
    );
    assert!(html.contains("route-tracker__skeleton"), "{html}");
    assert!(html.contains("Loading posts"));
}

#[test]
fn map_page_hosts_the_interactive_map() {
    let props = MapPageProps {
        preloaded: Some(ProgressData::new(8_262.0, 20_000.0)),
    };
    let html = block_on(LocalServerRenderer::<MapPage>::with_props(props).render());
    assert!(html.contains("Vladivostok to Cabo da Roca"));
    assert!(html.contains("interactive-map__stage"), "{html}");
    // Up to and including Samarkand.
    assert_eq!(html.matches("waypoint--reached").count(), 5);
}

#[test]
fn stories_page_uses_preloaded_feeds() {
    let props = StoriesPageProps {
        episodes: Some(vec![episode("Latest", 2), episode("Older", 1)]),
        posts: Some(vec![SubstackPost {
            title: "Week one".to_string(),
            link: "https://whereisriax.substack.com/p/week-one".to_string(),
            pub_date: "2026-04-08 10:00:00".to_string(),
            description: "Blisters...".to_string(),
            formatted_date: "Apr 8, 2026".to_string(),
        }]),
    };
    let html = block_on(LocalServerRenderer::<StoriesPage>::with_props(props).render());
    assert!(html.contains("Week one"));
    assert!(html.contains("Latest"));
    assert!(html.contains("podcast-feed__more"), "{html}");
    assert!(html.contains("Episode 1"));
}

#[test]
fn not_found_offers_a_way_home() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Off the route"));
    assert!(html.contains("Back to the start"));
}
