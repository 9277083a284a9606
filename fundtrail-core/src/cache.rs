//! Stale-while-revalidate cache with a hard fallback.
//!
//! Every fetch-backed feature shares one contract: serve a persisted
//! `{data, timestamp}` envelope while it is younger than the TTL, otherwise
//! fetch; a successful fetch overwrites the envelope, a failed one falls back
//! to whatever envelope exists regardless of age, and only when nothing is
//! cached does the caller see the error.

use std::fmt::Display;
use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage::{Clock, KeyValueStore};

/// Time-to-live presets.
pub mod ttl {
    use std::time::Duration;

    pub const FUNDRAISING: Duration = Duration::from_secs(5 * 60);
    pub const CLUB: Duration = Duration::from_secs(5 * 60);
    pub const ACTIVITIES: Duration = Duration::from_secs(15 * 60);
    pub const EVENTS: Duration = Duration::from_secs(10 * 60);
    pub const FEEDS: Duration = Duration::from_secs(30 * 60);
}

/// Persisted wrapper around a cached value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    pub data: T,
    /// Milliseconds since the Unix epoch at write time.
    pub timestamp: u64,
}

/// Where a value handed out by the cache came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOrigin {
    /// Cache hit inside the TTL; no request was made.
    Fresh,
    /// Just fetched and written back.
    Fetched,
    /// Fetch failed; served an expired entry instead.
    Stale,
}

/// A value plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub value: T,
    pub origin: CacheOrigin,
    pub timestamp: u64,
}

impl<T> Cached<T> {
    /// True when the value is a fallback served after a failed fetch.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.origin, CacheOrigin::Stale)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Cached<U> {
        Cached {
            value: f(self.value),
            origin: self.origin,
            timestamp: self.timestamp,
        }
    }
}

/// Single-slot cache bound to one storage key and TTL.
pub struct TtlCache<T, S, C> {
    store: S,
    clock: C,
    key: String,
    ttl: Duration,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S, C> TtlCache<T, S, C>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(store: S, clock: C, key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            ttl,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    fn ttl_ms(&self) -> u64 {
        u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX)
    }

    /// Read the envelope regardless of age.
    ///
    /// A corrupt entry is removed and reported as a miss; storage failures are
    /// logged and reported as a miss.
    pub fn read_any(&self) -> Option<CacheEnvelope<T>> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("cache read failed for {}: {err}", self.key);
                return None;
            }
        };

        match serde_json::from_str::<CacheEnvelope<T>>(&raw) {
            Ok(envelope) => Some(envelope),
            Err(err) => {
                warn!("discarding corrupt cache entry {}: {err}", self.key);
                if let Err(err) = self.store.remove_item(&self.key) {
                    warn!("failed to remove corrupt cache entry {}: {err}", self.key);
                }
                None
            }
        }
    }

    /// Read the envelope only while it is younger than the TTL.
    pub fn read_fresh(&self) -> Option<CacheEnvelope<T>> {
        let now = self.clock.now_ms();
        let ttl = self.ttl_ms();
        self.read_any()
            .filter(|envelope| now.saturating_sub(envelope.timestamp) < ttl)
    }

    /// Persist a value stamped with the current time.
    ///
    /// Returns the timestamp that was written, or `None` when storage refused
    /// the write (the failure is logged, not propagated).
    pub fn write(&self, value: &T) -> Option<u64> {
        let timestamp = self.clock.now_ms();
        let envelope = CacheEnvelope {
            data: value,
            timestamp,
        };
        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize cache entry {}: {err}", self.key);
                return None;
            }
        };
        match self.store.set_item(&self.key, &raw) {
            Ok(()) => Some(timestamp),
            Err(err) => {
                warn!("cache write failed for {}: {err}", self.key);
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.remove_item(&self.key) {
            warn!("failed to clear cache entry {}: {err}", self.key);
        }
    }

    /// Serve a fresh entry or fetch, falling back to any entry on failure.
    ///
    /// # Errors
    ///
    /// Returns the fetch error only when the fetch failed and nothing is cached.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetcher: F) -> Result<Cached<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        if let Some(envelope) = self.read_fresh() {
            return Ok(Cached {
                value: envelope.data,
                origin: CacheOrigin::Fresh,
                timestamp: envelope.timestamp,
            });
        }
        self.revalidate(fetcher).await
    }

    /// Fetch unconditionally, keeping the stale fallback.
    ///
    /// # Errors
    ///
    /// Returns the fetch error only when the fetch failed and nothing is cached.
    pub async fn revalidate<F, Fut, E>(&self, fetcher: F) -> Result<Cached<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        match fetcher().await {
            Ok(value) => {
                let timestamp = self.write(&value).unwrap_or_else(|| self.clock.now_ms());
                Ok(Cached {
                    value,
                    origin: CacheOrigin::Fetched,
                    timestamp,
                })
            }
            Err(err) => {
                warn!("fetch for {} failed: {err}", self.key);
                self.read_any().map_or(Err(err), |envelope| {
                    Ok(Cached {
                        value: envelope.data,
                        origin: CacheOrigin::Stale,
                        timestamp: envelope.timestamp,
                    })
                })
            }
        }
    }
}
