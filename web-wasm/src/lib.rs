//! LeafScan Web Client (Leptos + WASM)

mod api;
mod app;
mod components;
mod enrich;
mod geolocation;
mod notify;
mod reader;
mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    app::boot().map_err(|e| JsValue::from_str(&e.to_string()))
}
