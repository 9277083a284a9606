//! Error taxonomy shared by every fetch-backed widget.

use thiserror::Error;

/// Failure while pulling a remote document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape.
    #[error("Malformed payload: {0}")]
    Decode(String),
    /// The payload decoded but reported a failure of its own.
    #[error("Upstream reported failure: {0}")]
    Rejected(String),
}

impl FetchError {
    /// Whether this error maps to the network-failure class (non-2xx or rejected fetch).
    #[must_use]
    pub const fn is_network_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Failure while touching client-side persistent storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage write failed: {0}")]
    Write(String),
    #[error("Cached entry is corrupt: {0}")]
    Corrupt(String),
}
