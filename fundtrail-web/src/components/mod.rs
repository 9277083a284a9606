pub mod countdown;
pub mod footer;
pub mod fundraising_summary;
pub mod header;
pub mod interactive_map;
pub mod motion_toggle;
pub mod podcast_feed;
pub mod reveal;
pub mod route_tracker;
pub mod substack_feed;
pub mod typewriter;
