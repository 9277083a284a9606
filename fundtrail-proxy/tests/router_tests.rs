mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use common::{FakeApi, harness};
use fundtrail_proxy::{FallbackPolicy, ProxyError, router};
use serde_json::Value;
use tower::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: axum::Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn healthz_answers_ok() {
    let h = harness(FakeApi::default(), FallbackPolicy::Empty);
    let (status, body) = get(router(h.service), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn club_uses_camel_case_fields() {
    let h = harness(FakeApi::club_with_data(), FallbackPolicy::Empty);
    let json = get_json(router(h.service), "/api/strava/club").await;
    assert_eq!(json["memberCount"], 318);
    assert_eq!(json["stravaUrl"], "https://www.strava.com/clubs/20000km");
    assert_eq!(json["profileImage"], "");
}

#[tokio::test]
async fn activities_honour_the_limit_query() {
    let h = harness(FakeApi::club_with_data(), FallbackPolicy::Empty);
    let app = router(h.service);

    let json = get_json(app.clone(), "/api/strava/activities?limit=3").await;
    assert_eq!(json["activities"].as_array().unwrap().len(), 3);
    assert_eq!(json["totalCount"], 12);
    assert_eq!(json["activities"][0]["type"], "Run");
    assert_eq!(json["activities"][0]["distanceKm"], "5.00");

    let json = get_json(app.clone(), "/api/strava/activities").await;
    assert_eq!(json["activities"].as_array().unwrap().len(), 10);

    let json = get_json(app, "/api/strava/activities?limit=500").await;
    assert_eq!(json["activities"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn upstream_errors_never_become_error_statuses() {
    let h = harness(FakeApi::failing(ProxyError::Status(401)), FallbackPolicy::Empty);
    let app = router(h.service);

    let events = get_json(app.clone(), "/api/strava/events").await;
    assert_eq!(events["upcoming"], Value::Array(Vec::new()));
    assert_eq!(events["past"], Value::Array(Vec::new()));

    let activities = get_json(app, "/api/strava/activities?limit=abc").await;
    assert_eq!(activities["totalMovingTimeFormatted"], "0:00");
    assert_eq!(activities["totalDistanceKm"], 0);
}

#[tokio::test]
async fn events_carry_the_past_flag() {
    let h = harness(FakeApi::club_with_data(), FallbackPolicy::Empty);
    let json = get_json(router(h.service), "/api/strava/events").await;
    assert_eq!(json["upcoming"][0]["isPast"], false);
    assert_eq!(json["past"][0]["isPast"], true);
    assert_eq!(json["past"][0]["activityType"], "Run");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let h = harness(FakeApi::default(), FallbackPolicy::Empty);
    let (status, _) = get(router(h.service), "/api/strava/segments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
