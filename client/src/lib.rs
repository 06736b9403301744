//! # client
//!
//! Leptos + WASM frontend for the Puzzle 4 board.
//!
//! This crate renders the board and forwards DOM mouse events to the
//! `puzzle` crate's [`puzzle::engine::EngineCore`]. It supplies the two things
//! the engine cannot do itself: measuring where a piece is on screen, and
//! listening for document-level mouse moves while a piece is being turned.

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
