//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

pub const DEFAULT_API_BASE: &str = "https://www.strava.com/api/v3";

/// Token value shipped in the sample environment file; never a real credential.
pub const PLACEHOLDER_TOKEN: &str = "your_access_token_here";

/// What to serve while no access token is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FallbackPolicy {
    /// Zeroed or empty response shapes.
    #[default]
    Empty,
    /// Sample club activities, for local development.
    Placeholder,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fundtrail-proxy", version)]
#[command(about = "Caching Strava club proxy for the 20,000 km fundraising run")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "FUNDTRAIL_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Strava club id or vanity slug
    #[arg(long, env = "STRAVA_CLUB_ID", default_value = "")]
    pub club_id: String,

    /// Bearer token sent to the Strava API
    #[arg(long, env = "STRAVA_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Base URL of the Strava API
    #[arg(long, env = "STRAVA_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Response served while no access token is configured
    #[arg(long, env = "STRAVA_FALLBACK", value_enum, default_value_t = FallbackPolicy::Empty)]
    pub fallback: FallbackPolicy,

    /// Upstream request timeout in seconds
    #[arg(long, env = "STRAVA_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Config {
    /// The access token, unless it is blank or the sample placeholder.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty() && *token != PLACEHOLDER_TOKEN)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
