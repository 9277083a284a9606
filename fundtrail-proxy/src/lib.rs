//! Caching proxy in front of the Strava club API.
//!
//! The access token stays on the server. Every endpoint answers `200` with a
//! well-formed body; upstream trouble degrades to the last good response or an
//! empty shape.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod strava;

use std::time::Duration;

use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use log::{error, info};
use tower_http::cors::{Any, CorsLayer};

pub use config::{Config, FallbackPolicy};
pub use error::ProxyError;
pub use routes::AppState;
pub use service::StravaService;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/strava/club", get(routes::club))
        .route("/api/strava/activities", get(routes::activities))
        .route("/api/strava/events", get(routes::events))
        .route("/healthz", get(routes::healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                error!("Failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
