//! User notices and console logging

use wasm_bindgen::JsValue;

/// Blocking user notice.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn log_error(context: &str, detail: &str) {
    web_sys::console::error_2(
        &JsValue::from_str(context),
        &JsValue::from_str(detail),
    );
}

pub fn log_warn(context: &str, detail: &str) {
    web_sys::console::warn_2(
        &JsValue::from_str(context),
        &JsValue::from_str(detail),
    );
}
