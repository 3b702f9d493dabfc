#![recursion_limit = "512"]

pub mod app;
pub mod booking;
pub mod components;
pub mod config;
pub mod db;
pub mod server;
pub mod storage;
pub mod utils;
pub mod views;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
