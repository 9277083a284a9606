//! Site-wide constants.

pub use fundtrail_core::feeds::{PODCAST_SHOW_URL, SUBSTACK_URL};
pub use fundtrail_core::fundraising::DEFAULT_DATA_URL as DATA_URL;

pub const SITE_NAME: &str = "20,000 km";
pub const TAGLINE: &str = "Running from Vladivostok to Cabo da Roca, one funded kilometre at a time.";

/// Start of the run, RFC 3339.
pub const LAUNCH_DATE: &str = "2026-04-01T06:00:00+10:00";

pub const TRACKER_DESKTOP_SVG: &str = "static/route-desktop.svg";
pub const TRACKER_MOBILE_SVG: &str = "static/route-mobile.svg";
pub const MAP_IMAGE: &str = "static/route-map.webp";
pub const MAP_IMAGE_ALT: &str = "Map of Eurasia with the running route from Vladivostok to Cabo da Roca";

/// Ids of the live regions, unique per page.
pub const TRACKER_LIVE_REGION: &str = "route-tracker-live";
pub const MAP_LIVE_REGION: &str = "map-live-region";
