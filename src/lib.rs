//! Duck Dash core crate.
//!
//! A pixel-duck endless runner drawn to a 2D canvas. The per-frame
//! simulation lives in [`sim`] as pure Rust so it runs under native
//! `cargo test`; [`game`] wires it to the DOM, the canvas context and
//! LocalStorage through wasm-bindgen.

use wasm_bindgen::prelude::*;

pub mod sim;
pub mod sprite;
pub mod storage;

mod game;
mod render;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Entry point called from the host page once the module is loaded.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_runner()
}

/// Milliseconds since page load; doubles as the per-run RNG seed source.
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
