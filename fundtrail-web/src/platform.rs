//! Browser implementations of the core storage and clock seams.

use fundtrail_core::{Campaign, Clock, KeyValueStore, StorageError};

use crate::dom;

/// `localStorage`-backed store. Every call fails with
/// [`StorageError::Unavailable`] outside a browser or when storage is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStore;

fn unavailable(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(dom::js_error_message(err))
}

fn storage() -> Result<web_sys::Storage, StorageError> {
    dom::local_storage().ok_or_else(|| StorageError::Unavailable("localStorage unavailable".to_string()))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage()?
            .get_item(key)
            .map_err(|err| unavailable(&err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(dom::js_error_message(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        storage()?
            .remove_item(key)
            .map_err(|err| unavailable(&err))
    }
}

/// `Date.now()` in the browser, the system clock elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            fundtrail_core::numbers::floor_f64_to_u64(js_sys::Date::now())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            fundtrail_core::storage::SystemClock.now_ms()
        }
    }
}

/// Signed milliseconds for countdown math.
#[must_use]
pub fn now_ms() -> i64 {
    i64::try_from(BrowserClock.now_ms()).unwrap_or(i64::MAX)
}

pub type WebCampaign = Campaign<LocalStore, BrowserClock>;

#[must_use]
pub const fn campaign() -> WebCampaign {
    Campaign::new(LocalStore, BrowserClock)
}
