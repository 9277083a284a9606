#![cfg(target_arch = "wasm32")]

mod browser_tests;
mod component_tests;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
