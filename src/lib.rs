//! # hackathon-page
//!
//! WASM behavior layer for the server-rendered hackathon site: alert
//! auto-dismiss, team chat polling and sending, entrance animation, delete
//! confirmation, and clipboard copy with toast feedback.
//!
//! The controller logic in `state` talks to the page only through the small
//! capability traits it declares, so it builds and tests natively. The `dom`
//! module binds those traits to web-sys and the Bootstrap globals and is only
//! compiled with the `hydrate` feature.

pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod net;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging, then attach page behavior once the DOM
/// is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    dom::boot::run();
}
