use thiserror::Error;

/// Failure while talking to the Strava API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    /// No usable access token is configured.
    #[error("Strava API error: No valid access token")]
    CredentialMissing,
    #[error("Strava API error: HTTP {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("Strava API request failed: {0}")]
    Transport(String),
    #[error("Strava API returned an unexpected payload: {0}")]
    Decode(String),
}

impl ProxyError {
    /// Strava answers 401 once the token has expired or been revoked.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::CredentialMissing | Self::Status(401))
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
