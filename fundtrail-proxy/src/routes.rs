use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::service::StravaService;
use crate::strava::activities::parse_limit;
use crate::strava::{ActivitiesReport, ClubSummary, EventsReport};

pub type AppState = Arc<StravaService>;

#[derive(Debug, Default, Deserialize)]
pub struct ActivitiesQuery {
    limit: Option<String>,
}

pub async fn club(State(service): State<AppState>) -> Json<ClubSummary> {
    Json(service.club().await)
}

pub async fn activities(
    State(service): State<AppState>,
    Query(query): Query<ActivitiesQuery>,
) -> Json<ActivitiesReport> {
    Json(service.activities(parse_limit(query.limit.as_deref())).await)
}

pub async fn events(State(service): State<AppState>) -> Json<EventsReport> {
    Json(service.events().await)
}

pub async fn healthz() -> &'static str {
    "ok"
}
