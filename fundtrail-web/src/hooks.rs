//! Data and preference hooks shared by the components.

use std::cell::RefCell;
use std::rc::Rc;

use fundtrail_core::feeds::{
    FeedError, FeedResponse, PODCAST_ERROR, PODCAST_RSS_URL, SUBSTACK_ERROR, podcast_episodes,
    rss2json_url, substack_feed_url, substack_posts,
};
use fundtrail_core::progress::DEFAULT_TOTAL_KM;
use fundtrail_core::reveal::VISIBLE_CLASS;
use fundtrail_core::{
    Cached, FetchError, FundraisingView, PodcastEpisode, ProgressData, RevealAction,
    RevealOptions, SubstackPost, TtlCache,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::platform::{BrowserClock, LocalStore, campaign};
use crate::{a11y, dom, net, paths};

/// Lifecycle of remotely loaded data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready {
        value: Rc<T>,
        /// Served from an expired cache entry after a failed fetch.
        cached: bool,
    },
    Unavailable(String),
}

impl<T> LoadState<T> {
    pub fn ready(value: T) -> Self {
        Self::Ready {
            value: Rc::new(value),
            cached: false,
        }
    }

    fn settle<E: std::fmt::Display>(outcome: Result<Cached<T>, E>, message: Option<&str>) -> Self {
        match outcome {
            Ok(cached) => Self::Ready {
                cached: cached.is_fallback(),
                value: Rc::new(cached.value),
            },
            Err(err) => {
                log::error!("load failed with nothing cached: {err}");
                Self::Unavailable(message.map_or_else(|| err.to_string(), str::to_string))
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready { value, .. } => Some(value.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_cached(&self) -> bool {
        matches!(self, Self::Ready { cached: true, .. })
    }
}

/// Which persisted entry a progress consumer reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressFeed {
    Tracker,
    Map,
    Fundraising,
}

impl ProgressFeed {
    fn cache(self) -> TtlCache<ProgressData, LocalStore, BrowserClock> {
        let campaign = campaign();
        match self {
            Self::Tracker => campaign.route_tracker(),
            Self::Map => campaign.interactive_map(),
            Self::Fundraising => campaign.fundraising(),
        }
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_progress(url: &str, fallback_total: f64) -> Result<ProgressData, FetchError> {
    net::fetch_json::<ProgressData>(&paths::resolve_url(url))
        .await
        .map(|data| data.normalized(fallback_total))
}

#[allow(clippy::future_not_send)]
async fn load_progress(
    feed: ProgressFeed,
    url: &str,
    fallback_total: f64,
    force: bool,
) -> Result<Cached<ProgressData>, FetchError> {
    let cache = feed.cache();
    let fetcher = || fetch_progress(url, fallback_total);
    let outcome = if force {
        cache.revalidate(fetcher).await
    } else {
        cache.get_or_fetch(fetcher).await
    };
    outcome.map(|cached| cached.map(|data| data.normalized(fallback_total)))
}

/// Progress state plus a manual refresh.
#[derive(Clone, PartialEq)]
pub struct ProgressHandle {
    pub state: LoadState<ProgressData>,
    pub refresh: Callback<()>,
}

/// Load `{fundedKm, totalKm}` through the feed's cache.
///
/// `preloaded` skips the network entirely and is what server renders use.
#[hook]
pub fn use_progress(
    feed: ProgressFeed,
    url: AttrValue,
    fallback_total: f64,
    preloaded: Option<ProgressData>,
) -> ProgressHandle {
    let state = {
        let preloaded = preloaded.clone();
        use_state(move || {
            preloaded.map_or(LoadState::Loading, |data| {
                LoadState::ready(data.normalized(fallback_total))
            })
        })
    };
    let generation = use_state(|| 0_u32);

    {
        let state = state.clone();
        let skip = preloaded.is_some();
        use_effect_with((url, *generation), move |(url, generation)| {
            if !skip {
                let url = url.to_string();
                let force = *generation > 0;
                spawn_local(async move {
                    let outcome = load_progress(feed, &url, fallback_total, force).await;
                    state.set(LoadState::settle(outcome, None));
                });
            }
            || ()
        });
    }

    let refresh = {
        let generation = generation.clone();
        Callback::from(move |()| generation.set(generation.wrapping_add(1)))
    };

    ProgressHandle {
        state: (*state).clone(),
        refresh,
    }
}

/// Fundraising summary with a refresh callback.
#[derive(Clone, PartialEq)]
pub struct FundraisingHandle {
    pub view: FundraisingView,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_fundraising(url: AttrValue, preloaded: Option<ProgressData>) -> FundraisingHandle {
    let view = {
        let preloaded = preloaded.clone();
        use_state(move || {
            preloaded.map_or_else(FundraisingView::loading, |data| FundraisingView {
                data: data.normalized(DEFAULT_TOTAL_KM),
                is_loading: false,
                error: None,
                cached: false,
            })
        })
    };
    let generation = use_state(|| 0_u32);

    {
        let view = view.clone();
        let skip = preloaded.is_some();
        use_effect_with((url, *generation), move |(url, generation)| {
            if !skip {
                let url = url.to_string();
                let force = *generation > 0;
                if force {
                    view.set(FundraisingView {
                        is_loading: true,
                        ..(*view).clone()
                    });
                }
                spawn_local(async move {
                    let outcome =
                        load_progress(ProgressFeed::Fundraising, &url, DEFAULT_TOTAL_KM, force)
                            .await;
                    view.set(FundraisingView::from_outcome(outcome));
                });
            }
            || ()
        });
    }

    let refresh = {
        let generation = generation.clone();
        Callback::from(move |()| generation.set(generation.wrapping_add(1)))
    };

    FundraisingHandle {
        view: (*view).clone(),
        refresh,
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_feed(feed_url: &str) -> Result<Vec<fundtrail_core::feeds::FeedItem>, FeedError> {
    net::fetch_json::<FeedResponse>(&rss2json_url(feed_url))
        .await?
        .into_items()
}

#[hook]
pub fn use_podcast(preloaded: Option<Vec<PodcastEpisode>>) -> LoadState<Vec<PodcastEpisode>> {
    let skip = preloaded.is_some();
    let state = use_state(move || preloaded.map_or(LoadState::Loading, LoadState::ready));
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            if !skip {
                spawn_local(async move {
                    let outcome = campaign()
                        .podcast()
                        .get_or_fetch(|| async {
                            fetch_feed(PODCAST_RSS_URL)
                                .await
                                .map(|items| podcast_episodes(&items))
                        })
                        .await;
                    state.set(LoadState::settle(outcome, Some(PODCAST_ERROR)));
                });
            }
            || ()
        });
    }
    (*state).clone()
}

#[hook]
pub fn use_substack(preloaded: Option<Vec<SubstackPost>>) -> LoadState<Vec<SubstackPost>> {
    let skip = preloaded.is_some();
    let state = use_state(move || preloaded.map_or(LoadState::Loading, LoadState::ready));
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            if !skip {
                spawn_local(async move {
                    let feed_url = substack_feed_url();
                    let feed_url = feed_url.as_str();
                    let outcome = campaign()
                        .substack()
                        .get_or_fetch(|| async move {
                            fetch_feed(feed_url)
                                .await
                                .map(|items| substack_posts(&items))
                        })
                        .await;
                    state.set(LoadState::settle(outcome, Some(SUBSTACK_ERROR)));
                });
            }
            || ()
        });
    }
    (*state).clone()
}

/// Requested change to the saved sensory mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionChange {
    Toggle,
    Enable,
    Disable,
    Auto,
}

/// Resolved motion preference shared through context.
#[derive(Clone, PartialEq)]
pub struct MotionContext {
    pub allowed: bool,
    pub change: Callback<MotionChange>,
}

#[derive(Properties, PartialEq)]
pub struct MotionProviderProps {
    #[prop_or_default]
    pub children: Html,
    /// Overrides the stored preference; server renders pass `Some(false)`.
    #[prop_or_default]
    pub initial: Option<bool>,
}

#[function_component(MotionProvider)]
pub fn motion_provider(p: &MotionProviderProps) -> Html {
    let initial = p.initial;
    let allowed = use_state(move || initial.unwrap_or_else(a11y::motion_allowed));

    let change = {
        let allowed = allowed.clone();
        Callback::from(move |change: MotionChange| {
            let settings = campaign().motion();
            let next = match change {
                MotionChange::Toggle => settings.toggle(*allowed),
                MotionChange::Enable => settings.enable(),
                MotionChange::Disable => settings.disable(),
                MotionChange::Auto => settings.set_auto(dom::prefers_reduced_motion()),
            };
            a11y::apply_motion_preference(next);
            allowed.set(next);
        })
    };

    let context = MotionContext {
        allowed: *allowed,
        change,
    };
    html! {
        <ContextProvider<MotionContext> {context}>
            { p.children.clone() }
        </ContextProvider<MotionContext>>
    }
}

/// Whether animations may run. Without a provider the stored preference is read.
#[hook]
pub fn use_motion_allowed() -> bool {
    use_context::<MotionContext>().map_or_else(a11y::motion_allowed, |ctx| ctx.allowed)
}

fn apply_reveal(element: &Element, action: RevealAction) {
    let classes = element.class_list();
    let result = match action {
        RevealAction::Show | RevealAction::ShowAndRelease => classes.add_1(VISIBLE_CLASS),
        RevealAction::Hide => classes.remove_1(VISIBLE_CLASS),
        RevealAction::Keep => Ok(()),
    };
    if let Err(err) = result {
        log::warn!("reveal class update failed: {}", dom::js_error_message(&err));
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(element: &Element, options: &RevealOptions) -> Option<RevealObserver> {
    let opts = options.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let action = opts.on_intersection(entry.is_intersecting());
                apply_reveal(&target, action);
                if action == RevealAction::ShowAndRelease {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some(RevealObserver {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            dom::console_error(&format!(
                "IntersectionObserver unavailable: {}",
                dom::js_error_message(&err)
            ));
            apply_reveal(element, RevealAction::Show);
            None
        }
    }
}

/// Add `is-visible` to `node` once it scrolls into view.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, options: RevealOptions) {
    let motion_allowed = use_motion_allowed();
    use_effect_with(motion_allowed, move |allowed| {
        let observer: Rc<RefCell<Option<RevealObserver>>> = Rc::new(RefCell::new(None));
        let mut timer = None;
        if let Some(element) = node.cast::<Element>() {
            if let Some(action) = options.on_register(*allowed) {
                apply_reveal(&element, action);
            } else {
                let slot = Rc::clone(&observer);
                timer = dom::Timeout::schedule(options.delay_ms, move || {
                    *slot.borrow_mut() = observe(&element, &options);
                });
            }
        }
        move || {
            drop(timer);
            observer.borrow_mut().take();
        }
    });
}
