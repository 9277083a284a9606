use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fundtrail_core::storage::SystemClock;
use fundtrail_proxy::strava::HttpClubApi;
use fundtrail_proxy::{Config, StravaService, router, shutdown_signal};
use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    if config.credential().is_none() {
        warn!(
            "STRAVA_ACCESS_TOKEN is not set; serving {:?} fallbacks",
            config.fallback
        );
    }
    if config.club_id.is_empty() {
        warn!("STRAVA_CLUB_ID is not set");
    }

    let api = HttpClubApi::new(&config).context("building the Strava client")?;
    let service = StravaService::new(
        Arc::new(api),
        Arc::new(SystemClock),
        config.club_id.clone(),
        config.fallback,
    );

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!("fundtrail-proxy listening on {}", config.bind);

    axum::serve(listener, router(Arc::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving requests")?;

    info!("fundtrail-proxy stopped");
    Ok(())
}
