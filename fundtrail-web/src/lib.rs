#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod paths;
pub mod platform;
pub mod router;
pub mod site;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Reflect the saved motion preference before the first paint.
    crate::a11y::apply_motion_preference(crate::a11y::motion_allowed());
    yew::Renderer::<app::App>::new().render();
}
