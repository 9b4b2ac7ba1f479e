//! Browser entry point (wasm32 only).
//!
//! `start` runs as soon as the bundle is instantiated by the page's module
//! script: it applies the stored theme, wires the toggle button and kicks off
//! the one-shot weather fetch.

mod dom;
pub mod theme;
pub mod weather;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    theme::init();
    wasm_bindgen_futures::spawn_local(weather::load());
}
