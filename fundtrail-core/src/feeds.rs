//! Podcast and blog feeds read through the rss2json aggregator.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::FetchError;
use crate::format::{
    excerpt, format_duration_seconds, format_duration_text, format_short_date, strip_tags,
    truncate_chars,
};

pub const RSS2JSON_API: &str = "https://api.rss2json.com/v1/api.json";
pub const PODCAST_RSS_URL: &str = "https://publicfeeds.net/f/5670/women-who-travel";
pub const PODCAST_SHOW_URL: &str = "https://open.spotify.com/show/1T2czpHjPbzMNhnFCphQsV";
pub const SUBSTACK_URL: &str = "https://whereisriax.substack.com";

pub const PODCAST_ERROR: &str = "Unable to load podcast";
pub const SUBSTACK_ERROR: &str = "Unable to load posts";

const PODCAST_ITEMS: usize = 10;
const PODCAST_EXCERPT: usize = 200;
const SUBSTACK_ITEMS: usize = 3;
const SUBSTACK_EXCERPT: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("feed aggregator returned status '{0}'")]
    Status(String),
}

/// Aggregator URL for a feed.
#[must_use]
pub fn rss2json_url(feed_url: &str) -> String {
    format!("{RSS2JSON_API}?rss_url={}", encode_uri_component(feed_url))
}

#[must_use]
pub fn substack_feed_url() -> String {
    format!("{SUBSTACK_URL}/feed")
}

/// Percent-encode everything outside the URI-component unreserved set.
fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            other => {
                let _ = write!(out, "%{other:02X}");
            }
        }
    }
    out
}

/// Aggregator response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

impl FeedResponse {
    /// Items of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Status`] when the aggregator did not report `ok`.
    pub fn into_items(self) -> Result<Vec<FeedItem>, FeedError> {
        if self.status == "ok" {
            Ok(self.items)
        } else {
            Err(FeedError::Status(self.status))
        }
    }
}

/// One feed entry. `enclosure` and `itunes` vary in shape between feeds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub enclosure: Option<Value>,
    #[serde(default)]
    pub itunes: Option<Value>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Null | Value::Bool(false) => false,
        _ => true,
    })
}

impl FeedItem {
    fn body(&self) -> &str {
        non_empty(self.description.as_deref())
            .or_else(|| non_empty(self.content.as_deref()))
            .unwrap_or("")
    }

    fn audio_url(&self) -> String {
        let enclosure = self.enclosure.as_ref();
        let field = |name: &str| enclosure.and_then(|e| e.get(name)).and_then(Value::as_str);
        non_empty(field("link"))
            .or_else(|| non_empty(field("url")))
            .unwrap_or("")
            .to_string()
    }

    fn duration(&self) -> String {
        let from_enclosure = truthy(self.enclosure.as_ref().and_then(|e| e.get("duration")));
        let from_itunes = truthy(self.itunes.as_ref().and_then(|i| i.get("duration")));
        match from_enclosure.or(from_itunes) {
            Some(Value::String(s)) => format_duration_text(s),
            Some(Value::Number(n)) => n.as_f64().map(format_duration_seconds).unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn pub_date(&self) -> String {
        self.pub_date.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastEpisode {
    pub title: String,
    pub description: String,
    pub audio_url: String,
    pub duration: String,
    pub pub_date: String,
    pub formatted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<usize>,
}

/// Newest episodes first, numbered down from the feed length.
#[must_use]
pub fn podcast_episodes(items: &[FeedItem]) -> Vec<PodcastEpisode> {
    items
        .iter()
        .take(PODCAST_ITEMS)
        .enumerate()
        .map(|(index, item)| {
            let pub_date = item.pub_date();
            PodcastEpisode {
                title: non_empty(item.title.as_deref())
                    .unwrap_or("Untitled Episode")
                    .to_string(),
                description: excerpt(item.body(), PODCAST_EXCERPT),
                audio_url: item.audio_url(),
                duration: item.duration(),
                formatted_date: format_short_date(&pub_date),
                pub_date,
                episode_number: Some(items.len() - index),
            }
        })
        .collect()
}

/// Featured episode plus the shelf shown beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodcastShelf<'a> {
    pub latest: Option<&'a PodcastEpisode>,
    pub more: &'a [PodcastEpisode],
}

#[must_use]
pub fn podcast_shelf(episodes: &[PodcastEpisode]) -> PodcastShelf<'_> {
    let more = episodes.get(1..episodes.len().min(6)).unwrap_or(&[]);
    PodcastShelf {
        latest: episodes.first(),
        more,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstackPost {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub description: String,
    pub formatted_date: String,
}

#[must_use]
pub fn substack_posts(items: &[FeedItem]) -> Vec<SubstackPost> {
    items
        .iter()
        .take(SUBSTACK_ITEMS)
        .map(|item| {
            let pub_date = item.pub_date();
            let text = strip_tags(item.body());
            SubstackPost {
                title: item.title.clone().unwrap_or_default(),
                link: item.link.clone().unwrap_or_default(),
                description: format!("{}...", truncate_chars(&text, SUBSTACK_EXCERPT)),
                formatted_date: format_short_date(&pub_date),
                pub_date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> FeedResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn aggregator_url_encodes_the_feed() {
        assert_eq!(
            rss2json_url(&substack_feed_url()),
            "https://api.rss2json.com/v1/api.json?rss_url=https%3A%2F%2Fwhereisriax.substack.com%2Ffeed"
        );
    }

    #[test]
    fn non_ok_status_is_a_failure() {
        let err = response(r#"{"status":"error","message":"rate limited"}"#)
            .into_items()
            .unwrap_err();
        assert_eq!(err, FeedError::Status("error".into()));
        assert!(response(r#"{"status":"ok"}"#).into_items().unwrap().is_empty());
    }

    #[test]
    fn podcast_items_map_like_the_player_expects() {
        let items = response(
            r#"{"status":"ok","items":[
                {"title":"","pubDate":"2025-01-05 08:00:00","description":"<p>First <b>episode</b></p>",
                 "enclosure":{"link":"https://cdn/1.mp3","duration":3725}},
                {"title":"Second","pubDate":"2024-12-29 08:00:00","content":"Body",
                 "enclosure":[],"itunes":{"duration":"45:23"}},
                {"title":"Third","enclosure":{"url":"https://cdn/3.mp3","duration":"0"}}
            ]}"#,
        )
        .into_items()
        .unwrap();
        let episodes = podcast_episodes(&items);

        assert_eq!(episodes[0].title, "Untitled Episode");
        assert_eq!(episodes[0].description, "First episode...");
        assert_eq!(episodes[0].audio_url, "https://cdn/1.mp3");
        assert_eq!(episodes[0].duration, "1:02:05");
        assert_eq!(episodes[0].formatted_date, "Jan 5, 2025");
        assert_eq!(episodes[0].episode_number, Some(3));

        assert_eq!(episodes[1].audio_url, "");
        assert_eq!(episodes[1].duration, "45:23");
        assert_eq!(episodes[1].description, "Body...");

        assert_eq!(episodes[2].audio_url, "https://cdn/3.mp3");
        assert_eq!(episodes[2].duration, "0:00");
        assert_eq!(episodes[2].episode_number, Some(1));
    }

    #[test]
    fn podcast_keeps_ten_and_numbers_from_feed_length() {
        let items: Vec<FeedItem> = (0..14)
            .map(|n| FeedItem {
                title: Some(format!("Ep {n}")),
                ..FeedItem::default()
            })
            .collect();
        let episodes = podcast_episodes(&items);
        assert_eq!(episodes.len(), 10);
        assert_eq!(episodes[0].episode_number, Some(14));
        assert_eq!(episodes[9].episode_number, Some(5));

        let shelf = podcast_shelf(&episodes);
        assert_eq!(shelf.latest.map(|e| e.title.as_str()), Some("Ep 0"));
        assert_eq!(shelf.more.len(), 5);
        assert_eq!(shelf.more[0].title, "Ep 1");

        let empty = podcast_shelf(&[]);
        assert!(empty.latest.is_none() && empty.more.is_empty());
    }

    #[test]
    fn substack_takes_three_posts() {
        let items: Vec<FeedItem> = (0..5)
            .map(|n| FeedItem {
                title: Some(format!("Post {n}")),
                link: Some(format!("https://whereisriax.substack.com/p/{n}")),
                pub_date: Some("2025-02-10 12:00:00".into()),
                description: Some(format!("<p>{}</p>", "x".repeat(400))),
                ..FeedItem::default()
            })
            .collect();
        let posts = substack_posts(&items);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[2].link, "https://whereisriax.substack.com/p/2");
        assert_eq!(posts[0].description.len(), 153);
        assert_eq!(posts[0].formatted_date, "Feb 10, 2025");
    }

    #[test]
    fn cached_episodes_use_camel_case() {
        let episode = PodcastEpisode {
            title: "t".into(),
            description: String::new(),
            audio_url: "a".into(),
            duration: String::new(),
            pub_date: String::new(),
            formatted_date: String::new(),
            episode_number: Some(1),
        };
        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["audioUrl"], "a");
        assert_eq!(json["episodeNumber"], 1);
    }
}
