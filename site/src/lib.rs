//! # site
//!
//! WASM adapter that wires the portfolio page's DOM to the `scroll` core and
//! implements the page's smaller interactions: theme toggle, mobile nav,
//! reveal-on-scroll, contact form, footer year.
//!
//! Browser code is gated behind the `hydrate` feature. Without it, only the
//! pure models (theme, nav menu, contact payload, config) compile, which is
//! how the unit tests run natively.

pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod reveal;
#[cfg(feature = "hydrate")]
pub mod scroll_host;

/// Module entry point, run once by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"site: logger already initialized".into());
    }
    if let Err(e) = app::mount() {
        log::error!("site setup failed: {e}");
    }
}
