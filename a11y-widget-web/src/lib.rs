#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod components;
pub mod dom;
pub mod host_config;
pub mod logging;
pub mod observer;
pub mod page;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    bootstrap::launch();
}

/// Remove the controls and stop observing the page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = a11yTeardown)]
pub fn teardown() -> bool {
    bootstrap::teardown()
}
