pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod notify;
pub mod pages;
pub mod query;
pub mod routing;
#[cfg(feature = "ssr")]
pub mod server;
pub mod tooltip;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
