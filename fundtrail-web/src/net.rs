//! JSON and text fetches mapped onto [`FetchError`].

use fundtrail_core::FetchError;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dom;

fn network(err: &JsValue) -> FetchError {
    FetchError::Network(dom::js_error_message(err))
}

fn decode(err: &JsValue) -> FetchError {
    FetchError::Decode(dom::js_error_message(err))
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn ok_response(url: &str) -> Result<Response, FetchError> {
    let win = dom::window()
        .ok_or_else(|| FetchError::Network("fetch is only available in the browser".to_string()))?;
    let resp = dom::fetch_response(&win, url)
        .await
        .map_err(|err| network(&err))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(FetchError::Status(resp.status()))
    }
}

/// GET `url` and decode the JSON body.
///
/// # Errors
/// [`FetchError::Network`] when the request rejects, [`FetchError::Status`]
/// for non-2xx answers, [`FetchError::Decode`] when the body has the wrong shape.
#[allow(clippy::future_not_send)]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = ok_response(url).await?;
    let promise = resp.json().map_err(|err| decode(&err))?;
    let value = JsFuture::from(promise).await.map_err(|err| decode(&err))?;
    serde_wasm_bindgen::from_value(value).map_err(|err| FetchError::Decode(err.to_string()))
}

/// GET `url` as text.
///
/// # Errors
/// Same classes as [`fetch_json`].
#[allow(clippy::future_not_send)]
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = ok_response(url).await?;
    let promise = resp.text().map_err(|err| decode(&err))?;
    JsFuture::from(promise)
        .await
        .map_err(|err| decode(&err))?
        .as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))
}
