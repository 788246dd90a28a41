//! Portfolio site (Leptos + WASM)

mod app;
pub mod browser;
mod components;
pub mod profile;
pub mod route;
pub mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
