//! Strava club API access.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::types::{StravaActivity, StravaClub, StravaEvent};
use crate::config::Config;
use crate::error::ProxyError;

/// The three club endpoints the proxy republishes.
#[async_trait]
pub trait ClubApi: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the token is missing or the request fails.
    async fn club(&self) -> Result<StravaClub, ProxyError>;

    /// Most recent club activities, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or the request fails.
    async fn activities(&self, per_page: usize) -> Result<Vec<StravaActivity>, ProxyError>;

    /// # Errors
    ///
    /// Returns an error if the token is missing or the request fails.
    async fn group_events(&self) -> Result<Vec<StravaEvent>, ProxyError>;
}

/// [`ClubApi`] over HTTPS with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpClubApi {
    http: reqwest::Client,
    base: String,
    club_id: String,
    token: Option<String>,
}

impl HttpClubApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("fundtrail-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
            club_id: config.club_id.clone(),
            token: config.credential().map(str::to_string),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/clubs/{}{path}", self.base, self.club_id)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProxyError> {
        let token = self.token.as_deref().ok_or(ProxyError::CredentialMissing)?;
        let url = self.url(path);
        debug!("GET {url}");
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ClubApi for HttpClubApi {
    async fn club(&self) -> Result<StravaClub, ProxyError> {
        self.get_json("").await
    }

    async fn activities(&self, per_page: usize) -> Result<Vec<StravaActivity>, ProxyError> {
        self.get_json(&format!("/activities?per_page={per_page}")).await
    }

    async fn group_events(&self) -> Result<Vec<StravaEvent>, ProxyError> {
        self.get_json("/group_events").await
    }
}
