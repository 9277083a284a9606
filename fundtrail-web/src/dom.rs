use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Response, Storage, Window};

/// Media query consulted when the motion preference is `auto`.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Retrieve the global `window` object, if running in a browser.
///
/// Always `None` on native targets, where server-side rendering runs.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `<html>` element.
#[must_use]
pub fn root_element() -> Option<Element> {
    document().and_then(|doc| doc.document_element())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch rejects or the result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(win: &Window, url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Access the browser `localStorage` handle, if the page may use it.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Whether the operating system asks for reduced motion.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Current viewport width in CSS pixels.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
}

/// Handle to a pending `setTimeout`; cleared on drop.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` after `delay_ms`.
    #[must_use]
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let win = window()?;
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
        }) as Box<dyn FnMut()>);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(err) => {
                console_error(&format!("Failed to schedule timeout: {}", js_error_message(&err)));
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Handle to a running `setInterval`; cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    #[must_use]
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let win = window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let period = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(err) => {
                console_error(&format!("Failed to start interval: {}", js_error_message(&err)));
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

struct FrameLoopInner {
    handle: Option<i32>,
    closure: Option<FrameCallback>,
}

/// `requestAnimationFrame` loop; cancels its pending frame on drop.
///
/// The step receives milliseconds elapsed since the first frame and returns
/// whether another frame is wanted.
pub struct FrameLoop {
    inner: Rc<RefCell<FrameLoopInner>>,
}

impl FrameLoop {
    #[must_use]
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let win = window()?;
        let inner = Rc::new(RefCell::new(FrameLoopInner {
            handle: None,
            closure: None,
        }));
        let weak = Rc::downgrade(&inner);
        let mut started_at: Option<f64> = None;

        let closure = Closure::wrap(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let start = *started_at.get_or_insert(now);
            let again = step(now - start);
            let mut state = inner.borrow_mut();
            state.handle = None;
            if !again {
                return;
            }
            let next = window().and_then(|win| {
                state
                    .closure
                    .as_ref()
                    .and_then(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
            });
            state.handle = next;
        }) as Box<dyn FnMut(f64)>);

        let handle = win
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|err| {
                console_error(&format!(
                    "Failed to request animation frame: {}",
                    js_error_message(&err)
                ));
            })
            .ok()?;
        {
            let mut state = inner.borrow_mut();
            state.handle = Some(handle);
            state.closure = Some(closure);
        }
        Some(Self { inner })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Ok(mut state) = self.inner.try_borrow_mut() {
            if let Some(handle) = state.handle.take()
                && let Some(win) = window()
            {
                let _ = win.cancel_animation_frame(handle);
            }
            state.closure = None;
        }
    }
}
