//! Forca core crate.
//!
//! A Hangman word-guessing game for the browser with English and Portuguese
//! word lists. Game rules live in plain Rust (`game`, `words`, `view`) and are
//! tested natively; `dom` mounts them into the page through `web-sys`.

use wasm_bindgen::prelude::*;

pub mod config;
mod dom;
pub mod game;
pub mod input;
pub mod language;
pub mod rng;
pub mod storage;
pub mod view;
pub mod words;

pub use game::{Game, Phase, Snapshot};
pub use language::Language;

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

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::mount()
}

#[wasm_bindgen]
pub fn stop_game() {
    dom::unmount()
}

/// JSON picture of the running round, or `null` before `start_game`.
#[wasm_bindgen]
pub fn game_state_json() -> Result<String, JsValue> {
    serde_json::to_string(&dom::snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
}
