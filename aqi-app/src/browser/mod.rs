//! Adapters for the browser APIs.

use wasm_bindgen::JsValue;

mod geolocation;
mod push;

pub use self::{geolocation::*, push::*};

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|msg| msg.as_string())
        .unwrap_or_else(|| "unknown JS error".to_string())
}
