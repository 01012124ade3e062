//! Browser client for the collaborative whiteboard.
//!
//! The page ([`pages::board`]) composes the navbar, layer list, live canvas
//! and attribute sidebar around a [`state::whiteboard::Whiteboard`], which
//! owns the interactive surface and the joined room. Server-side rendering
//! uses the `ssr` feature; the `hydrate` feature enables the browser bindings.

pub mod app;
pub mod components;
pub mod consts;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("client: logger ready");
    }
    leptos::mount::hydrate_body(app::App);
}
