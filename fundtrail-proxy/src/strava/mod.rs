//! Strava club data: upstream access, response shaping and fallbacks.

pub mod activities;
pub mod client;
pub mod club;
pub mod events;
pub mod placeholder;
pub mod types;

pub use client::{ClubApi, HttpClubApi};
pub use types::{ActivitiesReport, ActivitySummary, ClubSummary, EventSummary, EventsReport};
