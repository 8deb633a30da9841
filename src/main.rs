//! TI-OS site - browser entry point
//!
//! `dx serve` / `dx bundle` build this for the web; the router is scoped to
//! the base path configured in Dioxus.toml.

use ti_os_site::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] TI-OS site initialized".into());
    dioxus::launch(App);
}

// Native (desktop renderer)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    dioxus::launch(App);
}
